//! Application state: merged configuration plus startup inventory logging.
//!
//! The drill core itself is stateless. Batches are rebuilt from their seed on
//! every request and never stored, so the shared state is just the config
//! resolved at startup.

use tracing::{info, instrument};

use crate::config::{load_drill_config_from_env, DrillConfig};
use crate::curriculum::CURRICULUM;

#[derive(Clone)]
pub struct AppState {
    pub config: DrillConfig,
}

impl AppState {
    /// Build state from env: load TOML config (or defaults) and log the
    /// curriculum inventory.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = load_drill_config_from_env().unwrap_or_default();

        // Inventory summary per grade.
        for def in CURRICULUM {
            let levels: usize = def.topics.iter().map(|t| t.levels.len()).sum();
            info!(
                target: "drill",
                grade = def.grade.code(),
                topics = def.topics.len(),
                levels,
                "Startup curriculum inventory"
            );
        }
        info!(
            target: "sansuu_backend",
            default_grade = %config.defaults.grade,
            default_topic = %config.defaults.topic,
            default_count = config.defaults.count,
            max_count = config.limits.max_count,
            "Drill configuration ready"
        );

        Self { config }
    }
}
