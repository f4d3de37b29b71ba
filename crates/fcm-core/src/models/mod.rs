pub mod cycle;
pub mod edge;
pub mod eigenvalue;
pub mod iteration_report;
pub mod stabilization_outcome;
pub mod trajectory;

pub use cycle::{Cycle, Parity};
pub use edge::{EdgeRef, EdgeSign, SignedEdge};
pub use eigenvalue::Eigenvalue;
pub use iteration_report::IterationReport;
pub use stabilization_outcome::{ControllerState, RemovalRecord, StabilizationOutcome};
pub use trajectory::ImpulseTrajectory;
