//! Owner of the merged history
//!
//! Holds the latest immutable snapshot of each source and rebuilds the merged
//! history on every commit. Each load carries a ticket ([`BulkTicket`] or
//! [`LiveTicket`]); tickets from a superseded load are ignored.

use std::sync::Arc;

use saleslens_domain::{
    FeedHandle, LiveSnapshot, ReadinessState, Result, SalesLensError, SalesRecord, Salesperson,
    SourceKind, SourceWarning,
};
use tracing::{debug, info, warn};

use super::merge::merge_histories;
use super::readiness::ReadinessTracker;

/// Identifies one bulk load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkTicket {
    generation: u64,
}

impl BulkTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Identifies one live load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTicket {
    generation: u64,
    feed: FeedHandle,
}

impl LiveTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn feed(&self) -> &FeedHandle {
        &self.feed
    }
}

/// Read-only view handed to consumers.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub records: Arc<Vec<SalesRecord>>,
    pub salespersons: Arc<Vec<Salesperson>>,
    pub product_context: String,
    pub warnings: Vec<SourceWarning>,
    /// Hard live failure (schema mismatch). Bulk data is still served.
    pub live_error: Option<String>,
    pub readiness: ReadinessState,
    pub version: u64,
    pub feed: Option<FeedHandle>,
}

impl HistoryView {
    pub fn is_loading(&self) -> bool {
        self.readiness != ReadinessState::Done
    }
}

#[derive(Debug, Default)]
pub struct HistoryStore {
    bulk: Arc<Vec<SalesRecord>>,
    live: Option<Arc<Vec<SalesRecord>>>,
    salespersons: Arc<Vec<Salesperson>>,
    product_context: String,
    merged: Arc<Vec<SalesRecord>>,
    version: u64,
    warnings: Vec<SourceWarning>,
    live_error: Option<String>,
    readiness: ReadinessTracker,
    bulk_generation: u64,
    live_generation: u64,
    feed: Option<FeedHandle>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a bulk load, superseding any bulk load in flight.
    pub fn begin_bulk(&mut self) -> BulkTicket {
        self.bulk_generation += 1;
        self.clear_warnings(SourceKind::Bulk);
        self.readiness.bulk_started();
        BulkTicket { generation: self.bulk_generation }
    }

    /// Record the outcome of a bulk load. Failures keep an empty bulk set and
    /// surface as a warning. Returns `false` when the ticket is stale and the
    /// outcome was discarded.
    pub fn commit_bulk(&mut self, ticket: &BulkTicket, outcome: Result<Vec<SalesRecord>>) -> bool {
        if ticket.generation != self.bulk_generation {
            debug!(
                generation = ticket.generation,
                current = self.bulk_generation,
                "discarding stale bulk result"
            );
            return false;
        }

        match outcome {
            Ok(records) => {
                info!(records = records.len(), "bulk history loaded");
                self.bulk = Arc::new(records);
            }
            Err(err) => {
                warn!(error = %err, "bulk history unavailable");
                self.bulk = Arc::new(Vec::new());
                self.warnings.push(SourceWarning::new(SourceKind::Bulk, err.to_string()));
            }
        }
        self.readiness.bulk_settled();
        self.rebuild();
        true
    }

    /// No live load will happen (no feed or no session). Data from an earlier
    /// feed is dropped.
    pub fn skip_live(&mut self) {
        self.disconnect_live();
    }

    /// Start a live load for `feed`, superseding any load in flight.
    pub fn begin_live(&mut self, feed: FeedHandle) -> LiveTicket {
        self.live_generation += 1;
        if self.feed.as_ref() != Some(&feed) && self.live.is_some() {
            self.clear_live_data();
            self.rebuild();
        }
        self.feed = Some(feed.clone());
        self.live_error = None;
        self.clear_warnings(SourceKind::Live);
        self.readiness.expect_live(true);
        debug!(feed = %feed, generation = self.live_generation, "live load started");
        LiveTicket { generation: self.live_generation, feed }
    }

    /// Record the outcome of a live load. Returns `false` when the ticket is
    /// stale and the outcome was discarded.
    pub fn commit_live(&mut self, ticket: &LiveTicket, outcome: Result<LiveSnapshot>) -> bool {
        if ticket.generation != self.live_generation {
            debug!(
                feed = %ticket.feed,
                generation = ticket.generation,
                current = self.live_generation,
                "discarding stale live result"
            );
            return false;
        }

        match outcome {
            Ok(snapshot) => {
                info!(
                    feed = %ticket.feed,
                    records = snapshot.records.len(),
                    salespersons = snapshot.salespersons.len(),
                    "live history loaded"
                );
                self.live = Some(Arc::new(snapshot.records));
                self.salespersons = Arc::new(snapshot.salespersons);
                self.product_context = snapshot.product_context;
            }
            Err(SalesLensError::SchemaMismatch(message)) => {
                warn!(feed = %ticket.feed, %message, "live feed schema mismatch");
                self.clear_live_data();
                self.live_error = Some(message);
            }
            Err(err) => {
                warn!(feed = %ticket.feed, error = %err, "live history unavailable");
                self.clear_live_data();
                self.warnings.push(SourceWarning::new(SourceKind::Live, err.to_string()));
            }
        }
        self.readiness.live_settled();
        self.rebuild();
        true
    }

    /// Drop the live feed. Any load in flight becomes stale.
    pub fn disconnect_live(&mut self) {
        self.live_generation += 1;
        self.feed = None;
        self.live_error = None;
        self.clear_warnings(SourceKind::Live);
        self.clear_live_data();
        self.readiness.expect_live(false);
        self.rebuild();
    }

    pub fn records(&self) -> Arc<Vec<SalesRecord>> {
        Arc::clone(&self.merged)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn readiness(&self) -> ReadinessState {
        self.readiness.state()
    }

    pub fn view(&self) -> HistoryView {
        HistoryView {
            records: Arc::clone(&self.merged),
            salespersons: Arc::clone(&self.salespersons),
            product_context: self.product_context.clone(),
            warnings: self.warnings.clone(),
            live_error: self.live_error.clone(),
            readiness: self.readiness.state(),
            version: self.version,
            feed: self.feed.clone(),
        }
    }

    fn clear_live_data(&mut self) {
        self.live = None;
        self.salespersons = Arc::new(Vec::new());
        self.product_context.clear();
    }

    fn clear_warnings(&mut self, source: SourceKind) {
        self.warnings.retain(|warning| warning.source != source);
    }

    fn rebuild(&mut self) {
        self.merged = Arc::new(merge_histories(&self.bulk, self.live.as_deref().map(Vec::as_slice)));
        self.version += 1;
        debug!(records = self.merged.len(), version = self.version, "merged history rebuilt");
    }
}
