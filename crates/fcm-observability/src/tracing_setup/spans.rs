//! Span definitions per operation: stabilization run, round, analysis stages.

/// Create a span covering a whole stabilization run.
#[macro_export]
macro_rules! stabilization_span {
    ($nodes:expr, $edges:expr) => {
        tracing::info_span!("fcm.stabilization", nodes = $nodes, edges = $edges)
    };
}

/// Create a span for one analysis round.
#[macro_export]
macro_rules! round_span {
    ($round:expr) => {
        tracing::info_span!("fcm.round", round = $round)
    };
}

/// Create a span for one analysis stage (spectral, cycles, impulse).
#[macro_export]
macro_rules! analysis_span {
    ($stage:expr) => {
        tracing::debug_span!("fcm.analysis", stage = %$stage)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const STABILIZATION: &str = "fcm.stabilization";
    pub const ROUND: &str = "fcm.round";
    pub const ANALYSIS: &str = "fcm.analysis";
}
