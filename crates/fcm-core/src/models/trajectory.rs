use serde::{Deserialize, Serialize};

/// Output of an impulse simulation.
///
/// `states[0]` is the zero seed x(1); `states[s]` for s ≥ 1 is the state after
/// s recurrence steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpulseTrajectory {
    /// The impulse vector applied at the first step.
    pub impulse: Vec<f64>,
    pub states: Vec<Vec<f64>>,
}

impl ImpulseTrajectory {
    /// Number of state vectors (steps + 1).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of nodes per state.
    pub fn dimension(&self) -> usize {
        self.impulse.len()
    }

    /// Time series of a single node across all states.
    pub fn series(&self, node: usize) -> Option<Vec<f64>> {
        if node >= self.dimension() {
            return None;
        }
        Some(self.states.iter().map(|state| state[node]).collect())
    }

    pub fn final_state(&self) -> Option<&[f64]> {
        self.states.last().map(Vec::as_slice)
    }
}
