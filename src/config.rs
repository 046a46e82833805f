//! Loading drill service configuration (request defaults + limits) from TOML.
//!
//! See `DrillConfig` for the expected schema. Every field is optional; the
//! built-in defaults reproduce the classroom setup (grade 3, integer sums,
//! level 1, ten problems).

use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_MAX_COUNT: usize = 200;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct DrillConfig {
  #[serde(default)]
  pub defaults: Defaults,
  #[serde(default)]
  pub limits: Limits,
}

/// Request parameters applied when a drill request omits them.
#[derive(Clone, Debug, Deserialize)]
pub struct Defaults {
  #[serde(default = "default_grade")]
  pub grade: String,
  #[serde(default = "default_topic")]
  pub topic: String,
  #[serde(default = "default_level")]
  pub level: u8,
  #[serde(default = "default_count")]
  pub count: usize,
  #[serde(default)]
  pub seed: u64,
}

impl Default for Defaults {
  fn default() -> Self {
    Self {
      grade: default_grade(),
      topic: default_topic(),
      level: default_level(),
      count: default_count(),
      seed: 0,
    }
  }
}

fn default_grade() -> String {
  "G3".into()
}
fn default_topic() -> String {
  "integer-sum-difference".into()
}
fn default_level() -> u8 {
  1
}
fn default_count() -> usize {
  10
}

/// Hard limits enforced on incoming requests.
#[derive(Clone, Debug, Deserialize)]
pub struct Limits {
  #[serde(default = "default_max_count")]
  pub max_count: usize,
}

impl Default for Limits {
  fn default() -> Self {
    Self { max_count: DEFAULT_MAX_COUNT }
  }
}

fn default_max_count() -> usize {
  DEFAULT_MAX_COUNT
}

/// Attempt to load `DrillConfig` from DRILL_CONFIG_PATH. On any parsing/IO
/// error, returns None and the caller falls back to the built-in defaults.
pub fn load_drill_config_from_env() -> Option<DrillConfig> {
  let path = std::env::var("DRILL_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<DrillConfig>(&s) {
      Ok(cfg) => {
        info!(target: "sansuu_backend", %path, "Loaded drill config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "sansuu_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "sansuu_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_toml_falls_back_to_built_in_defaults() {
    let cfg: DrillConfig = toml::from_str("").expect("empty config parses");
    assert_eq!(cfg.defaults.grade, "G3");
    assert_eq!(cfg.defaults.topic, "integer-sum-difference");
    assert_eq!(cfg.defaults.level, 1);
    assert_eq!(cfg.defaults.count, 10);
    assert_eq!(cfg.defaults.seed, 0);
    assert_eq!(cfg.limits.max_count, 200);
  }

  #[test]
  fn partial_toml_overrides_only_named_fields() {
    let cfg: DrillConfig = toml::from_str(
      r#"
[defaults]
grade = "G5"
count = 20

[limits]
max_count = 50
"#,
    )
    .expect("partial config parses");
    assert_eq!(cfg.defaults.grade, "G5");
    assert_eq!(cfg.defaults.count, 20);
    assert_eq!(cfg.defaults.topic, "integer-sum-difference");
    assert_eq!(cfg.defaults.level, 1);
    assert_eq!(cfg.limits.max_count, 50);
  }
}
