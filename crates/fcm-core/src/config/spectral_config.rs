use serde::{Deserialize, Serialize};

use super::defaults;

/// Eigen-decomposition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralConfig {
    /// Iteration budget for the Schur decomposition.
    pub max_iterations: usize,
    /// Width of the unit-radius band, in units of `n * EPSILON * max(‖A‖_F, 1)`.
    /// Zero compares the computed radius against 1 exactly.
    pub boundary_ulps: f64,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            max_iterations: defaults::DEFAULT_SCHUR_MAX_ITERATIONS,
            boundary_ulps: defaults::DEFAULT_BOUNDARY_ULPS,
        }
    }
}
