//! Port interfaces for the history sources
//!
//! Implemented in `saleslens-infra` (HTTP workbook download, Google Sheets).

use async_trait::async_trait;
use saleslens_domain::{FeedHandle, LiveSnapshot, Result, SalesRecord};

/// The periodically published workbook.
#[async_trait]
pub trait BulkSource: Send + Sync {
    /// Download and normalize every record of the workbook.
    async fn fetch_records(&self) -> Result<Vec<SalesRecord>>;
}

/// The authenticated live spreadsheet feed.
#[async_trait]
pub trait LiveSource: Send + Sync {
    /// Whether a session is available to read the feed.
    fn is_authenticated(&self) -> bool;

    /// Fetch transactional records and reference data from `feed`.
    async fn fetch_snapshot(&self, feed: &FeedHandle) -> Result<LiveSnapshot>;
}
