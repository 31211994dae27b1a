//! Analysis log export

pub mod ports;
pub mod recorder;

pub use ports::AnalysisLogSink;
pub use recorder::AnalysisRecorder;
