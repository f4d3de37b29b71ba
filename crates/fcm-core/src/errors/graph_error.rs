use super::error_code::{self, FcmErrorCode};

/// Graph construction and lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("shape error: matrix has {rows} rows but row {row} has {len} columns")]
    Shape { rows: usize, row: usize, len: usize },

    #[error("no such edge: {src} -> {dst}")]
    NoSuchEdge { src: usize, dst: usize },
}

impl FcmErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Shape { .. } => error_code::SHAPE_ERROR,
            Self::NoSuchEdge { .. } => error_code::NO_SUCH_EDGE,
        }
    }
}
