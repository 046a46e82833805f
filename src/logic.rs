//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Resolving raw request parameters against config defaults and limits
//!   - Building reproducible drill batches from a seed
//!   - Grading expected/user answer pairs
//!   - The curriculum listing served to menus

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::curriculum;
use crate::domain::Grade;
use crate::grading;
use crate::protocol::{to_problem_out, AnswerPair, DrillOut, GradeEntry, TopicEntry};
use crate::sampling;
use crate::state::AppState;

/// Fully validated drill parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillParams {
  pub grade: Grade,
  pub topic: String,
  pub level: u8,
  pub count: usize,
  pub seed: u64,
}

/// Resolve raw (query/WS) parameters against the configured defaults, then
/// validate. Out-of-range or unknown input is rejected here so the core
/// never sees a binding outside the curriculum.
pub fn resolve_params(
  state: &AppState,
  grade: Option<String>,
  topic: Option<String>,
  level: Option<u8>,
  count: Option<usize>,
  seed: Option<u64>,
) -> Result<DrillParams, String> {
  let defaults = &state.config.defaults;

  let grade_raw = grade.unwrap_or_else(|| defaults.grade.clone());
  let grade = Grade::parse(&grade_raw).ok_or_else(|| format!("Unknown grade: {}", grade_raw))?;

  let level = level.unwrap_or(defaults.level);
  if !(1..=5).contains(&level) {
    return Err(format!("Level out of range (1-5): {}", level));
  }

  let count = count.unwrap_or(defaults.count);
  let max_count = state.config.limits.max_count;
  if count < 1 || count > max_count {
    return Err(format!("Count out of range (1-{}): {}", max_count, count));
  }

  let topic = topic.unwrap_or_else(|| defaults.topic.clone());
  if curriculum::find_topic(grade, &topic).is_none() {
    return Err(format!("Unknown topic for {}: {}", grade.code(), topic));
  }

  Ok(DrillParams { grade, topic, level, count, seed: seed.unwrap_or(defaults.seed) })
}

/// Build one drill batch. Identical parameters (seed included) always yield
/// an identical batch; only the drill id differs.
#[instrument(level = "info", skip(params), fields(grade = %params.grade, topic = %params.topic, level = params.level, count = params.count, seed = params.seed))]
pub fn build_drill(params: &DrillParams) -> Result<DrillOut, String> {
  let (topic, level_def) = curriculum::find_level(params.grade, &params.topic, params.level)
    .ok_or_else(|| {
      format!("No curriculum entry for {}/{} level {}", params.grade.code(), params.topic, params.level)
    })?;

  let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
  let problems = sampling::generate_batch(level_def, params.count, &mut rng);

  let out = DrillOut {
    id: Uuid::new_v4().to_string(),
    grade: params.grade.code().to_string(),
    grade_label: params.grade.label_ja().to_string(),
    topic: topic.slug.to_string(),
    topic_name: topic.name_ja.to_string(),
    level: params.level,
    preset: level_def.preset.to_string(),
    count: problems.len(),
    seed: params.seed,
    problems: problems.iter().map(|p| to_problem_out(p, level_def.preset)).collect(),
  };
  info!(target: "drill", id = %out.id, problems = out.problems.len(), "Drill batch built");
  Ok(out)
}

/// Grade expected/user pairs. Unparsable or blank user input grades
/// incorrect; this never fails.
#[instrument(level = "info", skip(items), fields(total = items.len()))]
pub fn grade_answers(items: &[AnswerPair]) -> (Vec<bool>, usize, usize) {
  let (results, correct) =
    grading::grade_pairs(items.iter().map(|p| (p.expected.as_str(), p.answer.as_str())));
  info!(target: "drill", correct, total = results.len(), "Answers graded");
  (results, correct, items.len())
}

/// Curriculum listing for menu construction. Built from the same static map
/// the generators resolve against, so offered choices can never drift from
/// what generation accepts.
pub fn curriculum_listing() -> Vec<GradeEntry> {
  Grade::ALL
    .iter()
    .map(|&grade| GradeEntry {
      grade: grade.code().to_string(),
      label: grade.label_ja().to_string(),
      topics: curriculum::topics(grade)
        .iter()
        .map(|t| TopicEntry {
          slug: t.slug.to_string(),
          name: t.name_ja.to_string(),
          presets: t.levels.iter().map(|l| l.preset.to_string()).collect(),
        })
        .collect(),
    })
    .collect()
}
