//! One analysis round over an immutable matrix snapshot.

use std::collections::BTreeMap;

use fcm_analysis::{CycleClassifier, GraphModel, ImpulseSimulator, StabilityAnalyzer};
use fcm_core::config::{FcmConfig, SimulationConfig};
use fcm_core::errors::FcmResult;
use fcm_core::models::IterationReport;
use fcm_core::AdjacencyMatrix;
use fcm_observability::analysis_span;

/// Runs the spectral, cycle, and impulse analyses and assembles a report.
#[derive(Debug, Clone)]
pub struct RoundAnalyzer {
    spectral: StabilityAnalyzer,
    simulation: SimulationConfig,
}

impl RoundAnalyzer {
    pub fn new(config: &FcmConfig) -> Self {
        Self {
            spectral: StabilityAnalyzer::from_config(&config.spectral),
            simulation: config.simulation.clone(),
        }
    }

    /// Analyze `matrix`. The returned report has no removed edges; the
    /// controller fills them in when it mutates.
    pub fn analyze(
        &self,
        round: usize,
        matrix: &AdjacencyMatrix,
        names: &BTreeMap<usize, String>,
    ) -> FcmResult<IterationReport> {
        let graph = GraphModel::new(matrix, names);

        let spectrum = {
            let _span = analysis_span!("spectral").entered();
            self.spectral.assess(&graph.adjacency_matrix())?
        };
        let cycles = {
            let _span = analysis_span!("cycles").entered();
            CycleClassifier::analyze(&graph)?
        };
        let trajectory = {
            let _span = analysis_span!("impulse").entered();
            ImpulseSimulator::simulate_with_config(&graph.adjacency_matrix(), &self.simulation)?
        };

        let recommended = cycles.recommended();
        Ok(IterationReport {
            round,
            eigenvalues: spectrum.eigenvalues,
            spectral_radius: spectrum.spectral_radius,
            perturbation_stable: spectrum.perturbation_stable,
            numerically_stable: spectrum.numerically_stable,
            structurally_stable: cycles.is_structurally_stable(),
            cycle_count: cycles.cycles.len(),
            even_cycles: cycles.even_cycles,
            recommended,
            removed_edges: Vec::new(),
            trajectory,
            node_names: graph.names().to_vec(),
            edges: graph.signed_edges(),
        })
    }
}

impl Default for RoundAnalyzer {
    fn default() -> Self {
        Self::new(&FcmConfig::default())
    }
}
