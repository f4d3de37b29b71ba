//! # fcm-core
//!
//! Foundation crate for fuzzy cognitive map stability analysis.
//! Defines the adjacency matrix value type, report models, collaborator traits,
//! errors, config, and defaults. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod matrix;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FcmConfig;
pub use errors::{FcmError, FcmResult};
pub use matrix::AdjacencyMatrix;
pub use models::{
    ControllerState, Cycle, EdgeRef, EdgeSign, Eigenvalue, ImpulseTrajectory, IterationReport,
    Parity, RemovalRecord, SignedEdge, StabilizationOutcome,
};
pub use traits::{LabeledMatrix, MatrixSource, ReportSink};
