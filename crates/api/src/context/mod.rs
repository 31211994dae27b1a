//! Application context - dependency injection container

use std::sync::Arc;

use saleslens_core::{AnalysisRecorder, HistoryService, HistoryView};
use saleslens_domain::{Config, FeedHandle, Result, SourceKind};
use saleslens_infra::{GoogleSheetsSource, HttpClient, StaticTokenProvider, WorkbookSource};
use tracing::info;

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub history: Arc<HistoryService>,
    pub recorder: AnalysisRecorder,
    /// Live spreadsheet from the configuration, if any.
    pub feed: Option<FeedHandle>,
}

impl AppContext {
    /// Create a context from the configuration found by
    /// [`saleslens_infra::config::load`].
    pub fn new() -> Result<Self> {
        Self::new_with_config(saleslens_infra::config::load()?)
    }

    /// Create a context with a custom configuration
    ///
    /// Tests use this to point both sources at a mock server.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let client = HttpClient::from_config(&config.http)?;

        let bulk = Arc::new(WorkbookSource::from_config(client.clone(), &config.bulk));
        let tokens = Arc::new(StaticTokenProvider::from_config(&config.live));
        let sheets = Arc::new(GoogleSheetsSource::new(client, tokens, &config.live));

        let history = Arc::new(HistoryService::new(bulk, sheets.clone()));
        let recorder = AnalysisRecorder::new(sheets);
        let feed = config
            .live
            .spreadsheet_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(FeedHandle::new);

        info!(bulk_url = %config.bulk.url, live = feed.is_some(), "application context ready");
        Ok(Self { config, history, recorder, feed })
    }

    /// Load both sources for the configured feed.
    pub async fn load_history(&self) -> HistoryView {
        self.history.load(self.feed.clone()).await
    }

    /// Health of each source as of the last load.
    pub fn health_check(&self) -> HealthStatus {
        let view = self.history.snapshot();
        let warning_for = |kind: SourceKind| {
            view.warnings.iter().find(|w| w.source == kind).map(|w| w.message.clone())
        };

        let bulk = match warning_for(SourceKind::Bulk) {
            Some(message) => ComponentHealth::unhealthy("bulk", message),
            None => ComponentHealth::healthy("bulk"),
        };
        let live = if self.feed.is_none() {
            ComponentHealth::healthy("live").with_message("no live feed configured")
        } else if let Some(error) = view.live_error.clone().or_else(|| warning_for(SourceKind::Live)) {
            ComponentHealth::unhealthy("live", error)
        } else {
            ComponentHealth::healthy("live")
        };

        let mut status = HealthStatus::new().add_component(bulk).add_component(live);
        status.calculate_score();
        if view.is_loading() {
            status.message = Some("history is still loading".to_string());
        }
        status
    }
}
