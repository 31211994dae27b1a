//! History loading service - joins the two sources into the store

use std::sync::Arc;

use parking_lot::RwLock;
use saleslens_domain::{CallMetadata, FeedHandle, Result, SalesLensError};
use tracing::info;

use super::ports::{BulkSource, LiveSource};
use super::store::{BulkTicket, HistoryStore, HistoryView, LiveTicket};
use crate::matching::{match_call, CallContext, CallMatch};

/// Loads bulk and live history concurrently and serves the merged result.
pub struct HistoryService {
    bulk: Arc<dyn BulkSource>,
    live: Arc<dyn LiveSource>,
    store: Arc<RwLock<HistoryStore>>,
}

impl HistoryService {
    pub fn new(bulk: Arc<dyn BulkSource>, live: Arc<dyn LiveSource>) -> Self {
        Self { bulk, live, store: Arc::new(RwLock::new(HistoryStore::new())) }
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<RwLock<HistoryStore>> {
        Arc::clone(&self.store)
    }

    /// Load both sources concurrently. The live source is only queried when
    /// `feed` is set and a session is available.
    ///
    /// Source failures never fail the call; they appear as warnings (or as
    /// `live_error` for a schema mismatch) on the returned view.
    pub async fn load(&self, feed: Option<FeedHandle>) -> HistoryView {
        let (bulk_ticket, live_ticket) = {
            let mut store = self.store.write();
            let bulk_ticket = store.begin_bulk();
            let live_ticket = match feed {
                Some(feed) if self.live.is_authenticated() => Some(store.begin_live(feed)),
                Some(feed) => {
                    info!(feed = %feed, "live feed configured but not authenticated; bulk only");
                    store.skip_live();
                    None
                }
                None => {
                    store.skip_live();
                    None
                }
            };
            (bulk_ticket, live_ticket)
        };

        tokio::join!(self.load_bulk(bulk_ticket), async {
            if let Some(ticket) = live_ticket {
                self.load_live(ticket).await;
            }
        });

        self.snapshot()
    }

    /// Reload only the bulk workbook. A bulk load still in flight is
    /// superseded.
    pub async fn refresh_bulk(&self) -> HistoryView {
        let ticket = self.store.write().begin_bulk();
        self.load_bulk(ticket).await;
        self.snapshot()
    }

    /// Switch the live layer to `feed` and load it.
    pub async fn connect_live(&self, feed: FeedHandle) -> Result<HistoryView> {
        if !self.live.is_authenticated() {
            return Err(SalesLensError::Auth("live feed requires a signed-in session".into()));
        }
        let ticket = self.store.write().begin_live(feed);
        self.load_live(ticket).await;
        Ok(self.snapshot())
    }

    pub fn disconnect_live(&self) -> HistoryView {
        let mut store = self.store.write();
        store.disconnect_live();
        store.view()
    }

    pub fn snapshot(&self) -> HistoryView {
        self.store.read().view()
    }

    /// Resolve a call against the current history.
    pub fn match_call(&self, call: Option<&CallMetadata>) -> CallMatch {
        let view = self.snapshot();
        match_call(call, &view.salespersons, &view.records)
    }

    /// Build the analysis context for a call.
    pub fn call_context(&self, call: Option<&CallMetadata>) -> CallContext {
        let view = self.snapshot();
        let matched = match_call(call, &view.salespersons, &view.records);
        CallContext::new(matched, view.product_context)
    }

    async fn load_bulk(&self, ticket: BulkTicket) {
        let outcome = self.bulk.fetch_records().await;
        self.store.write().commit_bulk(&ticket, outcome);
    }

    async fn load_live(&self, ticket: LiveTicket) {
        let outcome = self.live.fetch_snapshot(ticket.feed()).await;
        self.store.write().commit_live(&ticket, outcome);
    }
}
