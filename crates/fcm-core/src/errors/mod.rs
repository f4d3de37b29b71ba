//! Error handling for the stability engine.
//! One error enum per subsystem, `thiserror` only, aggregated into [`FcmError`].

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod simulation_error;
pub mod spectral_error;

pub use config_error::ConfigError;
pub use error_code::FcmErrorCode;
pub use graph_error::GraphError;
pub use simulation_error::SimulationError;
pub use spectral_error::SpectralError;

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FcmError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("spectral error: {0}")]
    Spectral(#[from] SpectralError),

    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type FcmResult<T> = Result<T, FcmError>;

impl FcmErrorCode for FcmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Spectral(e) => e.error_code(),
            Self::Simulation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
