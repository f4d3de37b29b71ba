use serde::{Deserialize, Serialize};

use super::defaults;

/// Stabilization controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizationConfig {
    /// Maximum number of analysis rounds. `None` runs until structurally stable.
    pub max_rounds: Option<usize>,
}

impl Default for StabilizationConfig {
    fn default() -> Self {
        Self {
            max_rounds: defaults::DEFAULT_MAX_ROUNDS,
        }
    }
}
