use serde::{Deserialize, Serialize};

use super::{Cycle, EdgeRef, Eigenvalue, ImpulseTrajectory, SignedEdge};

/// Everything computed during one analysis round.
///
/// Self-contained: depends only on the matrix the round was computed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationReport {
    /// Zero-based round index.
    pub round: usize,
    pub eigenvalues: Vec<Eigenvalue>,
    pub spectral_radius: f64,
    /// Spectral radius ≤ 1.
    pub perturbation_stable: bool,
    /// Spectral radius < 1.
    pub numerically_stable: bool,
    /// No even cycle exists.
    pub structurally_stable: bool,
    /// Total number of simple cycles, even and odd.
    pub cycle_count: usize,
    /// Even cycles in enumeration order.
    pub even_cycles: Vec<Cycle>,
    pub recommended: Option<Cycle>,
    /// Edges zeroed at the end of this round. Empty for the final round.
    pub removed_edges: Vec<EdgeRef>,
    pub trajectory: ImpulseTrajectory,
    /// Display name per node index.
    pub node_names: Vec<String>,
    pub edges: Vec<SignedEdge>,
}

impl IterationReport {
    /// Trajectory series per node, paired with the node's display name.
    pub fn labelled_series(&self) -> Vec<(&str, Vec<f64>)> {
        self.node_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| Some((name.as_str(), self.trajectory.series(i)?)))
            .collect()
    }
}
