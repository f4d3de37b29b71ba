use serde::{Deserialize, Serialize};

use super::{Cycle, EdgeRef, IterationReport};
use crate::matrix::AdjacencyMatrix;

/// State of the stabilization controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    Analyzing,
    /// No even cycle remains.
    Stable,
    /// The round cap was reached first. Not an error.
    BoundedStop,
}

impl ControllerState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Analyzing)
    }
}

/// Edges removed during one mutation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalRecord {
    pub round: usize,
    pub cycle: Cycle,
    pub removed_edges: Vec<EdgeRef>,
}

/// Result of running the controller to a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilizationOutcome {
    pub state: ControllerState,
    pub reports: Vec<IterationReport>,
    pub history: Vec<RemovalRecord>,
    pub final_matrix: AdjacencyMatrix,
}

impl StabilizationOutcome {
    /// Number of rounds that removed edges.
    pub fn mutation_rounds(&self) -> usize {
        self.history.len()
    }

    pub fn is_stable(&self) -> bool {
        self.state == ControllerState::Stable
    }

    pub fn removed_edge_count(&self) -> usize {
        self.history.iter().map(|r| r.removed_edges.len()).sum()
    }
}
