pub mod matrix_source;
pub mod report_sink;

pub use matrix_source::{LabeledMatrix, MatrixSource};
pub use report_sink::ReportSink;
