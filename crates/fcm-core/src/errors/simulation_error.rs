use super::error_code::{self, FcmErrorCode};

/// Impulse simulation errors.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("dimension error: impulse has length {actual}, graph has {expected} nodes")]
    Dimension { expected: usize, actual: usize },

    #[error("value error: step count must be non-negative, got {steps}")]
    NegativeSteps { steps: i64 },
}

impl FcmErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Dimension { .. } => error_code::DIMENSION_ERROR,
            Self::NegativeSteps { .. } => error_code::VALUE_ERROR,
        }
    }
}
