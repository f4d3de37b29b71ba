//! Stabilization state machine.
//!
//! ```text
//! Analyzing ──(no even cycle)──▶ Stable
//!     │  ▲
//!     │  └──(edges removed)──┘
//!     └──(round cap reached)──▶ BoundedStop
//! ```
//!
//! Each mutation round zeroes at least one nonzero entry and nothing is ever
//! re-added, so a run performs at most E mutation rounds (E = initial edge
//! count) followed by one final analysis round.

use std::collections::BTreeMap;

use fcm_core::config::FcmConfig;
use fcm_core::errors::FcmResult;
use fcm_core::models::{ControllerState, IterationReport, RemovalRecord, StabilizationOutcome};
use fcm_core::traits::ReportSink;
use fcm_core::AdjacencyMatrix;
use fcm_observability::tracing_setup::events;
use fcm_observability::{round_span, stabilization_span};

use crate::removal::removal_edges;
use crate::round::RoundAnalyzer;

/// Owns the current matrix and mutates it round by round.
pub struct StabilizationController {
    matrix: AdjacencyMatrix,
    names: BTreeMap<usize, String>,
    analyzer: RoundAnalyzer,
    max_rounds: Option<usize>,
    state: ControllerState,
    round: usize,
    history: Vec<RemovalRecord>,
    /// Even cycles seen by the latest round.
    pending_even_cycles: usize,
}

impl StabilizationController {
    /// Validates `config` first, so bad settings fail here as `CONFIG_ERROR`
    /// rather than on the first round.
    pub fn new(matrix: AdjacencyMatrix, config: &FcmConfig) -> FcmResult<Self> {
        config.validate()?;
        Ok(Self {
            matrix,
            names: BTreeMap::new(),
            analyzer: RoundAnalyzer::new(config),
            max_rounds: config.stabilization.max_rounds,
            state: ControllerState::Analyzing,
            round: 0,
            history: Vec::new(),
            pending_even_cycles: 0,
        })
    }

    /// Attach display names. Names only affect report labels.
    pub fn with_names(mut self, names: BTreeMap<usize, String>) -> Self {
        self.names = names;
        self
    }

    /// Override the configured round cap.
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of rounds run so far.
    pub fn rounds(&self) -> usize {
        self.round
    }

    /// The current matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn history(&self) -> &[RemovalRecord] {
        &self.history
    }

    /// Run one round. Returns `None` once the controller is in a terminal
    /// state, including the call that discovers the round cap.
    pub fn step(&mut self) -> FcmResult<Option<IterationReport>> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        if let Some(cap) = self.max_rounds {
            if self.round >= cap {
                self.state = ControllerState::BoundedStop;
                events::round_cap_reached(cap, self.pending_even_cycles);
                return Ok(None);
            }
        }

        let span = round_span!(self.round);
        let _guard = span.enter();

        let mut report = self.analyzer.analyze(self.round, &self.matrix, &self.names)?;
        self.pending_even_cycles = report.even_cycles.len();
        events::round_completed(self.round, report.spectral_radius, report.even_cycles.len());

        match report.recommended.clone() {
            None => {
                self.state = ControllerState::Stable;
            }
            Some(cycle) => {
                let removed = removal_edges(&cycle);
                self.matrix = self.matrix.with_edges_zeroed(&removed);
                events::edges_removed(self.round, &cycle.to_string(), removed.len());
                self.history.push(RemovalRecord {
                    round: self.round,
                    cycle,
                    removed_edges: removed.clone(),
                });
                report.removed_edges = removed;
            }
        }

        self.round += 1;
        Ok(Some(report))
    }

    /// Run to a terminal state.
    pub fn run(self) -> FcmResult<StabilizationOutcome> {
        self.run_with_sink(&mut NullSink)
    }

    /// Run to a terminal state, forwarding every report to `sink`.
    pub fn run_with_sink(mut self, sink: &mut dyn ReportSink) -> FcmResult<StabilizationOutcome> {
        let span = stabilization_span!(self.matrix.size(), self.matrix.nonzero_count());
        let _guard = span.enter();

        let mut reports = Vec::new();
        while let Some(report) = self.step()? {
            sink.on_round(&report);
            reports.push(report);
        }

        let outcome = StabilizationOutcome {
            state: self.state,
            reports,
            history: self.history,
            final_matrix: self.matrix,
        };
        events::run_finished(
            state_label(outcome.state),
            outcome.reports.len(),
            outcome.removed_edge_count(),
        );
        sink.on_finished(&outcome);
        Ok(outcome)
    }
}

fn state_label(state: ControllerState) -> &'static str {
    match state {
        ControllerState::Analyzing => "analyzing",
        ControllerState::Stable => "stable",
        ControllerState::BoundedStop => "bounded_stop",
    }
}

struct NullSink;

impl ReportSink for NullSink {
    fn on_round(&mut self, _report: &IterationReport) {}
}
