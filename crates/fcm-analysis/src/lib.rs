//! # fcm-analysis
//!
//! Read-only analysis of a fuzzy cognitive map snapshot.
//! Builds a `petgraph` view of the adjacency matrix, computes the eigenvalue
//! spectrum with `nalgebra`, enumerates and classifies signed simple cycles,
//! and simulates impulse propagation.

pub mod cycles;
pub mod graph;
pub mod impulse;
pub mod spectral;

pub use cycles::{CycleAnalysis, CycleClassifier};
pub use graph::GraphModel;
pub use impulse::ImpulseSimulator;
pub use spectral::{SpectralAssessment, StabilityAnalyzer};
