//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; parameter validation errors come back as
//! 422 with a JSON message.

use std::sync::Arc;
use axum::{extract::{State, Query}, http::StatusCode, Json, response::IntoResponse};
use tracing::{info, instrument, warn};

use crate::protocol::*;
use crate::state::AppState;
use crate::logic;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info")]
pub async fn http_get_curriculum() -> impl IntoResponse {
  Json(CurriculumOut { grades: logic::curriculum_listing() })
}

#[instrument(level = "info", skip(state, q), fields(grade = ?q.grade, topic = ?q.topic, level = ?q.level))]
pub async fn http_get_drill(
  State(state): State<Arc<AppState>>,
  Query(q): Query<DrillQuery>,
) -> impl IntoResponse {
  match logic::resolve_params(&state, q.grade, q.topic, q.level, q.count, q.seed)
    .and_then(|params| logic::build_drill(&params))
  {
    Ok(drill) => {
      info!(target: "drill", id = %drill.id, count = drill.count, "HTTP drill served");
      (StatusCode::OK, Json(drill)).into_response()
    }
    Err(message) => {
      warn!(target: "drill", %message, "HTTP drill request rejected");
      (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorOut { message })).into_response()
    }
  }
}

#[instrument(level = "info", skip(body), fields(total = body.items.len()))]
pub async fn http_post_grade(Json(body): Json<GradeIn>) -> impl IntoResponse {
  let (results, correct, total) = logic::grade_answers(&body.items);
  info!(target: "drill", correct, total, "HTTP answers graded");
  Json(GradeResultOut { results, correct, total })
}
