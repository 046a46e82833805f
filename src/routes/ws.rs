//! WebSocket upgrade + message loop. Each client message is parsed as JSON
//! and forwarded to core logic. We reply with a single JSON message per
//! request; malformed input gets an in-band error message, never a close.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument, warn};

use crate::logic;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(ws, state))]
pub async fn ws_upgrade(
  ws: WebSocketUpgrade,
  State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
  info!(target: "sansuu_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "sansuu_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "sansuu_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state)
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) })
            .to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "sansuu_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => {
        let _ = socket.send(Message::Pong(payload)).await;
      }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "sansuu_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(msg, state))]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::NewDrill { grade, topic, level, count, seed } => {
      match logic::resolve_params(state, grade, topic, level, count, seed)
        .and_then(|params| logic::build_drill(&params))
      {
        Ok(drill) => {
          info!(target: "drill", id = %drill.id, count = drill.count, "WS drill served");
          ServerWsMessage::Drill { drill }
        }
        Err(message) => {
          warn!(target: "drill", %message, "WS drill request rejected");
          ServerWsMessage::Error { message }
        }
      }
    }

    ClientWsMessage::GradeAnswers { items } => {
      let (results, correct, total) = logic::grade_answers(&items);
      info!(target: "drill", correct, total, "WS answers graded");
      ServerWsMessage::GradeResult { results, correct, total }
    }

    ClientWsMessage::Curriculum => {
      ServerWsMessage::Curriculum { grades: logic::curriculum_listing() }
    }
  }
}
