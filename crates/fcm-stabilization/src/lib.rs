//! # fcm-stabilization
//!
//! Drives repeated analysis rounds over a fuzzy cognitive map, removing the
//! recommended even cycle's edges each round until no even cycle remains or a
//! round cap is hit.

pub mod controller;
pub mod engine;
pub mod removal;
pub mod round;

pub use controller::StabilizationController;
pub use engine::StabilizationEngine;
pub use removal::removal_edges;
pub use round::RoundAnalyzer;
