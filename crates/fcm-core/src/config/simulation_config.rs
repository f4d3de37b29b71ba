use serde::{Deserialize, Serialize};

use super::defaults;

/// Impulse simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of recurrence steps. Negative values are rejected.
    pub steps: i64,
    /// Impulse vector applied at the first step. `None` selects the default unit impulse.
    pub impulse: Option<Vec<f64>>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: defaults::DEFAULT_SIMULATION_STEPS,
            impulse: None,
        }
    }
}
