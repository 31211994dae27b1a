//! Analysis log command

use saleslens_domain::{AnalysisLogEntry, Result, SalesLensError};
use tokio::task::JoinHandle;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Queue an analysis summary for the configured feed's log sheet.
///
/// The append runs in the background; sink failures are logged, never
/// returned. The handle may be awaited or dropped.
///
/// # Errors
/// `Config` when no live feed is configured.
pub async fn record_analysis(ctx: &AppContext, entry: AnalysisLogEntry) -> Result<JoinHandle<()>> {
    execute_logged("analysis::record_analysis", move || async move {
        let feed = ctx
            .feed
            .clone()
            .ok_or_else(|| SalesLensError::Config("no live feed configured".into()))?;
        Ok(ctx.recorder.record(feed, entry))
    })
    .await
}
