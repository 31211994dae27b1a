//! Fire-and-forget analysis logging
//!
//! Logging a summary must never block or fail the analysis flow, so sink
//! errors are reported through `tracing` only.

use std::sync::Arc;

use saleslens_domain::{AnalysisLogEntry, FeedHandle};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::ports::AnalysisLogSink;

#[derive(Clone)]
pub struct AnalysisRecorder {
    sink: Arc<dyn AnalysisLogSink>,
}

impl AnalysisRecorder {
    pub fn new(sink: Arc<dyn AnalysisLogSink>) -> Self {
        Self { sink }
    }

    /// Append `entry` in the background. Must be called within a Tokio
    /// runtime.
    pub fn record(&self, feed: FeedHandle, entry: AnalysisLogEntry) -> JoinHandle<()> {
        let recorder = self.clone();
        tokio::spawn(async move {
            recorder.record_now(&feed, &entry).await;
        })
    }

    /// Append `entry` and wait for the sink. Returns whether it succeeded.
    pub async fn record_now(&self, feed: &FeedHandle, entry: &AnalysisLogEntry) -> bool {
        match self.sink.append_summary(feed, entry).await {
            Ok(()) => {
                debug!(feed = %feed, "analysis summary appended");
                true
            }
            Err(err) => {
                warn!(feed = %feed, error = %err, "failed to append analysis summary");
                false
            }
        }
    }
}
