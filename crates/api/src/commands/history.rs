//! History loading commands

use saleslens_core::HistoryView;
use saleslens_domain::{FeedHandle, Result};
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Load bulk and live history for the configured feed.
pub async fn load_history(ctx: &AppContext) -> Result<HistoryView> {
    execute_logged("history::load_history", move || async move {
        let view = ctx.load_history().await;
        tracing::info!(
            records = view.records.len(),
            warnings = view.warnings.len(),
            version = view.version,
            "history loaded"
        );
        Ok(view)
    })
    .await
}

/// Reload the bulk workbook only.
pub async fn refresh_bulk(ctx: &AppContext) -> Result<HistoryView> {
    execute_logged("history::refresh_bulk", move || async move {
        Ok(ctx.history.refresh_bulk().await)
    })
    .await
}

/// Point the live layer at another spreadsheet.
pub async fn connect_live_feed(ctx: &AppContext, spreadsheet_id: &str) -> Result<HistoryView> {
    execute_logged("history::connect_live_feed", move || async move {
        ctx.history.connect_live(FeedHandle::new(spreadsheet_id.trim())).await
    })
    .await
}

/// Summary printed by the `load` subcommand.
pub fn history_summary(view: &HistoryView) -> Value {
    json!({
        "records": view.records.len(),
        "salespersons": view.salespersons.len(),
        "warnings": view.warnings,
        "liveError": view.live_error,
        "readiness": view.readiness,
    })
}
