//! Stable string codes for every error variant.

pub const SHAPE_ERROR: &str = "SHAPE_ERROR";
pub const NO_SUCH_EDGE: &str = "NO_SUCH_EDGE";
pub const DIMENSION_ERROR: &str = "DIMENSION_ERROR";
pub const VALUE_ERROR: &str = "VALUE_ERROR";
pub const COMPUTATION_ERROR: &str = "COMPUTATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait FcmErrorCode {
    fn error_code(&self) -> &'static str;
}
