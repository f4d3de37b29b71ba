//! Integration tests for the stabilization controller and engine.

use std::collections::BTreeMap;

use fcm_core::config::FcmConfig;
use fcm_core::errors::{error_code, FcmError, FcmErrorCode};
use fcm_core::models::{ControllerState, Cycle, EdgeRef, IterationReport, StabilizationOutcome};
use fcm_core::traits::{LabeledMatrix, MatrixSource, ReportSink};
use fcm_core::{AdjacencyMatrix, FcmResult};
use fcm_stabilization::{StabilizationController, StabilizationEngine};

fn matrix(rows: Vec<Vec<f64>>) -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(rows).unwrap()
}

fn mutual_inhibition() -> AdjacencyMatrix {
    matrix(vec![
        vec![0.0, -1.0, 0.0],
        vec![-1.0, 0.0, 0.5],
        vec![0.0, 0.0, 0.0],
    ])
}

fn run(m: AdjacencyMatrix) -> StabilizationOutcome {
    StabilizationController::new(m, &FcmConfig::default())
        .unwrap()
        .run()
        .unwrap()
}

// ── End-to-end ───────────────────────────────────────────────────────────

#[test]
fn mutual_inhibition_is_broken_in_one_round() {
    let outcome = run(mutual_inhibition());

    assert_eq!(outcome.state, ControllerState::Stable);
    assert_eq!(outcome.reports.len(), 2);
    assert_eq!(outcome.mutation_rounds(), 1);

    let first = &outcome.reports[0];
    assert_eq!(first.cycle_count, 1);
    assert_eq!(first.even_cycles, vec![Cycle::new(vec![0, 1])]);
    assert_eq!(first.recommended, Some(Cycle::new(vec![0, 1])));
    assert_eq!(first.removed_edges, vec![EdgeRef::new(0, 1)]);
    assert!(!first.structurally_stable);

    let last = &outcome.reports[1];
    assert!(last.structurally_stable);
    assert_eq!(last.cycle_count, 0);
    assert!(last.removed_edges.is_empty());

    // The wrap-around edge (1, 0) survives.
    assert_eq!(outcome.final_matrix.get(0, 1), Some(0.0));
    assert_eq!(outcome.final_matrix.get(1, 0), Some(-1.0));
    assert_eq!(outcome.final_matrix.get(1, 2), Some(0.5));
}

#[test]
fn mutual_inhibition_reports_unit_radius_boundary() {
    let outcome = run(mutual_inhibition());
    let first = &outcome.reports[0];
    assert_eq!(first.spectral_radius, 1.0);
    assert!(first.perturbation_stable);
    assert!(!first.numerically_stable);
}

#[test]
fn unit_feedback_loop_of_four_stabilizes() {
    let mut rows = vec![vec![0.0; 4]; 4];
    for i in 0..4 {
        rows[i][(i + 1) % 4] = 1.0;
    }
    let outcome = run(matrix(rows));

    assert!(outcome.is_stable());
    assert_eq!(outcome.mutation_rounds(), 1);
    assert_eq!(outcome.history[0].cycle, Cycle::new(vec![0, 1, 2, 3]));
    assert_eq!(outcome.history[0].removed_edges.len(), 3);
    assert_eq!(outcome.reports[0].spectral_radius, 1.0);
    assert!(!outcome.reports[0].numerically_stable);
    // Only the wrap-around edge 3 -> 0 remains.
    assert_eq!(outcome.final_matrix.nonzero_count(), 1);
    assert!(outcome.reports[1].spectral_radius < 1e-12);
}

#[test]
fn all_zero_matrix_is_stable_without_mutation() {
    let outcome = run(AdjacencyMatrix::zeros(5));
    assert!(outcome.is_stable());
    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.mutation_rounds(), 0);
    assert_eq!(outcome.reports[0].spectral_radius, 0.0);
    assert_eq!(outcome.final_matrix, AdjacencyMatrix::zeros(5));
}

#[test]
fn empty_matrix_is_stable() {
    let outcome = run(AdjacencyMatrix::zeros(0));
    assert!(outcome.is_stable());
    assert_eq!(outcome.reports.len(), 1);
    assert!(outcome.reports[0].eigenvalues.is_empty());
}

#[test]
fn positive_self_loop_terminates() {
    let outcome = run(matrix(vec![vec![1.0]]));
    assert!(outcome.is_stable());
    assert_eq!(outcome.mutation_rounds(), 1);
    assert_eq!(outcome.history[0].removed_edges, vec![EdgeRef::new(0, 0)]);
    assert_eq!(outcome.final_matrix, AdjacencyMatrix::zeros(1));
}

#[test]
fn negative_self_loop_is_already_stable() {
    let outcome = run(matrix(vec![vec![-0.5]]));
    assert!(outcome.is_stable());
    assert_eq!(outcome.mutation_rounds(), 0);
    assert_eq!(outcome.reports[0].cycle_count, 1);
}

#[test]
fn mutation_rounds_never_exceed_edge_count() {
    let m = matrix(vec![
        vec![0.3, 0.2, 0.1, 0.4],
        vec![0.5, 0.6, 0.7, 0.1],
        vec![0.2, 0.9, 0.1, 0.3],
        vec![0.8, 0.1, 0.2, 0.5],
    ]);
    let edges = m.nonzero_count();
    let outcome = run(m);
    assert!(outcome.is_stable());
    assert!(outcome.mutation_rounds() <= edges);
    assert!(outcome.final_matrix.nonzero_count() < edges);
}

#[test]
fn reports_are_numbered_consecutively() {
    let outcome = run(mutual_inhibition());
    for (i, report) in outcome.reports.iter().enumerate() {
        assert_eq!(report.round, i);
    }
    assert_eq!(outcome.history[0].round, 0);
}

#[test]
fn each_report_carries_a_trajectory() {
    let outcome = run(mutual_inhibition());
    for report in &outcome.reports {
        // Default horizon of 5 steps plus the zero seed.
        assert_eq!(report.trajectory.len(), 6);
        assert_eq!(report.trajectory.dimension(), 3);
        assert_eq!(report.trajectory.impulse, vec![0.0, 1.0, 0.0]);
    }
}

// ── Round cap ────────────────────────────────────────────────────────────

#[test]
fn round_cap_yields_bounded_stop() {
    let triangle = matrix(vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ]);
    let outcome = StabilizationController::new(triangle, &FcmConfig::default())
        .unwrap()
        .with_max_rounds(Some(1))
        .run()
        .unwrap();

    assert_eq!(outcome.state, ControllerState::BoundedStop);
    assert!(!outcome.is_stable());
    assert_eq!(outcome.reports.len(), 1);
    assert_eq!(outcome.history.len(), 1);
}

#[test]
fn round_cap_from_config() {
    let config = FcmConfig::from_toml("[stabilization]\nmax_rounds = 0\n").unwrap();
    let outcome = StabilizationController::new(mutual_inhibition(), &config)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(outcome.state, ControllerState::BoundedStop);
    assert!(outcome.reports.is_empty());
    assert_eq!(outcome.final_matrix, mutual_inhibition());
}

#[test]
fn generous_cap_does_not_interfere() {
    let outcome = StabilizationController::new(mutual_inhibition(), &FcmConfig::default())
        .unwrap()
        .with_max_rounds(Some(10))
        .run()
        .unwrap();
    assert_eq!(outcome.state, ControllerState::Stable);
    assert_eq!(outcome.reports.len(), 2);
}

// ── Error propagation ────────────────────────────────────────────────────

#[test]
fn non_finite_entry_is_a_computation_error() {
    let m = matrix(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]);
    let err = StabilizationController::new(m, &FcmConfig::default())
        .unwrap()
        .run()
        .unwrap_err();
    assert!(matches!(err, FcmError::Spectral(_)));
    assert_eq!(err.error_code(), error_code::COMPUTATION_ERROR);
}

#[test]
fn wrong_impulse_length_is_a_dimension_error() {
    let mut config = FcmConfig::default();
    config.simulation.impulse = Some(vec![1.0]);
    let err = StabilizationController::new(mutual_inhibition(), &config)
        .unwrap()
        .run()
        .unwrap_err();
    assert_eq!(err.error_code(), error_code::DIMENSION_ERROR);
}

#[test]
fn negative_steps_is_rejected_before_any_round() {
    let mut config = FcmConfig::default();
    config.simulation.steps = -1;
    let err = StabilizationController::new(mutual_inhibition(), &config)
        .err()
        .unwrap();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn failed_round_leaves_matrix_untouched() {
    let mut config = FcmConfig::default();
    config.simulation.impulse = Some(vec![1.0]);
    let mut controller = StabilizationController::new(mutual_inhibition(), &config).unwrap();
    assert!(controller.step().is_err());
    assert_eq!(controller.matrix(), &mutual_inhibition());
    assert!(controller.history().is_empty());
    assert_eq!(controller.state(), ControllerState::Analyzing);
}

// ── Sinks ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct CountingSink {
    rounds: Vec<usize>,
    finished: Option<ControllerState>,
}

impl ReportSink for CountingSink {
    fn on_round(&mut self, report: &IterationReport) {
        self.rounds.push(report.round);
    }

    fn on_finished(&mut self, outcome: &StabilizationOutcome) {
        self.finished = Some(outcome.state);
    }
}

#[test]
fn sink_receives_every_round_and_the_outcome() {
    let mut sink = CountingSink::default();
    let outcome = StabilizationController::new(mutual_inhibition(), &FcmConfig::default())
        .unwrap()
        .run_with_sink(&mut sink)
        .unwrap();
    assert_eq!(sink.rounds, vec![0, 1]);
    assert_eq!(sink.finished, Some(outcome.state));
}

#[test]
fn vec_sink_collects_reports() {
    let mut collected: Vec<IterationReport> = Vec::new();
    let outcome = StabilizationController::new(mutual_inhibition(), &FcmConfig::default())
        .unwrap()
        .run_with_sink(&mut collected)
        .unwrap();
    assert_eq!(collected, outcome.reports);
}

// ── Engine ───────────────────────────────────────────────────────────────

struct FailingSource;

impl MatrixSource for FailingSource {
    fn load(&self) -> FcmResult<LabeledMatrix> {
        let matrix = AdjacencyMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]])?;
        Ok(LabeledMatrix::new(matrix))
    }
}

#[test]
fn engine_rejects_invalid_config() {
    let mut config = FcmConfig::default();
    config.simulation.steps = -3;
    let err = StabilizationEngine::new(config).unwrap_err();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn engine_stabilizes_labeled_source() {
    let names: BTreeMap<usize, String> = [(0, "price".to_string()), (1, "demand".to_string())]
        .into_iter()
        .collect();
    let source = LabeledMatrix::new(mutual_inhibition()).with_names(names);
    let engine = StabilizationEngine::new(FcmConfig::default()).unwrap();

    let outcome = engine.stabilize(&source).unwrap();
    assert!(outcome.is_stable());

    let edge = outcome.reports[0]
        .edges
        .iter()
        .find(|e| e.source == 0 && e.target == 1)
        .unwrap();
    assert_eq!(edge.source_name, "price");
    assert_eq!(edge.target_name, "demand");

    // Index 2 has no name and falls back to the default label.
    let edge = outcome.reports[0]
        .edges
        .iter()
        .find(|e| e.source == 1 && e.target == 2)
        .unwrap();
    assert_eq!(edge.target_name, "V3");
}

#[test]
fn engine_analyze_does_not_mutate() {
    let engine = StabilizationEngine::default();
    let source = LabeledMatrix::new(mutual_inhibition());
    let report = engine.analyze(&source).unwrap();
    assert_eq!(report.round, 0);
    assert_eq!(report.recommended, Some(Cycle::new(vec![0, 1])));
    assert!(report.removed_edges.is_empty());
    assert_eq!(source.load().unwrap().matrix, mutual_inhibition());
}

#[test]
fn engine_propagates_source_errors() {
    let engine = StabilizationEngine::default();
    let err = engine.stabilize(&FailingSource).unwrap_err();
    assert_eq!(err.error_code(), error_code::SHAPE_ERROR);

    let mut sink: Vec<IterationReport> = Vec::new();
    assert!(engine.stabilize_with_sink(&FailingSource, &mut sink).is_err());
    assert!(sink.is_empty());
}
