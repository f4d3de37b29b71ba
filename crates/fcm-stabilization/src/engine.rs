//! StabilizationEngine: validated config plus entry points for matrix sources.

use fcm_core::config::FcmConfig;
use fcm_core::errors::FcmResult;
use fcm_core::models::{IterationReport, StabilizationOutcome};
use fcm_core::traits::{LabeledMatrix, MatrixSource, ReportSink};

use crate::controller::StabilizationController;
use crate::round::RoundAnalyzer;

/// Entry point for callers that start from a [`MatrixSource`].
#[derive(Debug, Clone, Default)]
pub struct StabilizationEngine {
    config: FcmConfig,
}

impl StabilizationEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: FcmConfig) -> FcmResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FcmConfig {
        &self.config
    }

    /// A controller primed with the labeled matrix.
    pub fn controller(&self, labeled: LabeledMatrix) -> FcmResult<StabilizationController> {
        Ok(StabilizationController::new(labeled.matrix, &self.config)?.with_names(labeled.names))
    }

    /// Single analysis round without mutation.
    pub fn analyze(&self, source: &dyn MatrixSource) -> FcmResult<IterationReport> {
        let labeled = source.load()?;
        RoundAnalyzer::new(&self.config).analyze(0, &labeled.matrix, &labeled.names)
    }

    /// Load and stabilize.
    pub fn stabilize(&self, source: &dyn MatrixSource) -> FcmResult<StabilizationOutcome> {
        self.controller(source.load()?)?.run()
    }

    /// Load and stabilize, forwarding every round to `sink`.
    pub fn stabilize_with_sink(
        &self,
        source: &dyn MatrixSource,
        sink: &mut dyn ReportSink,
    ) -> FcmResult<StabilizationOutcome> {
        self.controller(source.load()?)?.run_with_sink(sink)
    }
}
