use super::error_code::{self, FcmErrorCode};

/// Eigen-decomposition errors.
#[derive(Debug, thiserror::Error)]
pub enum SpectralError {
    #[error("computation error: non-finite entry {value} at ({row}, {col})")]
    NonFinite { row: usize, col: usize, value: f64 },

    #[error("computation error: eigen-decomposition did not converge within {max_iterations} iterations")]
    NotConverged { max_iterations: usize },
}

impl FcmErrorCode for SpectralError {
    fn error_code(&self) -> &'static str {
        error_code::COMPUTATION_ERROR
    }
}
