//! Top-level configuration aggregating all sub-configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{ObservabilityConfig, SimulationConfig, SpectralConfig, StabilizationConfig};
use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FcmConfig {
    pub simulation: SimulationConfig,
    pub stabilization: StabilizationConfig,
    pub spectral: SpectralConfig,
    pub observability: ObservabilityConfig,
}

impl FcmConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.steps < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.steps".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if self.spectral.max_iterations == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "spectral.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !self.spectral.boundary_ulps.is_finite() || self.spectral.boundary_ulps < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "spectral.boundary_ulps".to_string(),
                message: "must be a finite, non-negative number".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", self.observability.log_level),
            });
        }
        Ok(())
    }
}
