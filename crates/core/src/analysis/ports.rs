use async_trait::async_trait;
use saleslens_domain::{AnalysisLogEntry, FeedHandle, Result};

/// Destination for call analysis summaries.
#[async_trait]
pub trait AnalysisLogSink: Send + Sync {
    /// Append one summary row to the log of `feed`.
    async fn append_summary(&self, feed: &FeedHandle, entry: &AnalysisLogEntry) -> Result<()>;
}
