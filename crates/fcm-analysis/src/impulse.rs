//! Discrete-time impulse propagation.
//!
//! ```text
//! x(0) = x(1) = 0
//! x(t+1) = x(t) + A·(x(t) − x(t−1)) + q_t      q_t = q on the first step, 0 after
//! ```

use nalgebra::{DMatrix, DVector};

use fcm_core::config::{defaults, SimulationConfig};
use fcm_core::errors::SimulationError;
use fcm_core::models::ImpulseTrajectory;
use fcm_core::AdjacencyMatrix;

/// Simulates the response of the network to a one-shot impulse.
pub struct ImpulseSimulator;

impl ImpulseSimulator {
    /// Unit impulse on the second node. Graphs with fewer than two nodes get
    /// the zero vector.
    pub fn default_impulse(n: usize) -> Vec<f64> {
        let mut q = vec![0.0; n];
        if let Some(slot) = q.get_mut(defaults::DEFAULT_IMPULSE_NODE) {
            *slot = 1.0;
        }
        q
    }

    /// Run `steps` recurrence steps. Returns `steps + 1` states: the zero seed
    /// x(1) followed by each computed state.
    pub fn simulate(
        matrix: &AdjacencyMatrix,
        impulse: Option<&[f64]>,
        steps: i64,
    ) -> Result<ImpulseTrajectory, SimulationError> {
        if steps < 0 {
            return Err(SimulationError::NegativeSteps { steps });
        }
        let n = matrix.size();
        let q = match impulse {
            Some(q) if q.len() != n => {
                return Err(SimulationError::Dimension {
                    expected: n,
                    actual: q.len(),
                })
            }
            Some(q) => q.to_vec(),
            None => Self::default_impulse(n),
        };

        let a = DMatrix::from_row_slice(n, n, matrix.as_slice());
        let kick = DVector::from_column_slice(&q);
        let mut previous = DVector::<f64>::zeros(n);
        let mut current = DVector::<f64>::zeros(n);

        let mut states = Vec::with_capacity(steps as usize + 1);
        states.push(current.as_slice().to_vec());
        for step in 0..steps {
            let mut next = &current + &a * (&current - &previous);
            if step == 0 {
                next += &kick;
            }
            previous = std::mem::replace(&mut current, next);
            states.push(current.as_slice().to_vec());
        }

        Ok(ImpulseTrajectory { impulse: q, states })
    }

    /// Simulate with the horizon and impulse taken from config.
    pub fn simulate_with_config(
        matrix: &AdjacencyMatrix,
        config: &SimulationConfig,
    ) -> Result<ImpulseTrajectory, SimulationError> {
        Self::simulate(matrix, config.impulse.as_deref(), config.steps)
    }
}
