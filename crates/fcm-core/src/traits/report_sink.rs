use crate::models::{IterationReport, StabilizationOutcome};

/// Receives reports as the controller produces them. Implemented by
/// presentation layers that render rounds or pace execution.
pub trait ReportSink {
    fn on_round(&mut self, report: &IterationReport);

    fn on_finished(&mut self, _outcome: &StabilizationOutcome) {}
}

/// Collects every report in memory.
impl ReportSink for Vec<IterationReport> {
    fn on_round(&mut self, report: &IterationReport) {
        self.push(report.clone());
    }
}
