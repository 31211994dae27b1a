//! Mock source and sink implementations
//!
//! Each mock can be gated on a `Notify` so tests control the order in which
//! concurrent loads settle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use saleslens_core::{AnalysisLogSink, BulkSource, LiveSource};
use saleslens_domain::{
    AnalysisLogEntry, FeedHandle, LiveSnapshot, Result as DomainResult, SalesLensError,
    SalesRecord,
};
use tokio::sync::Notify;

/// Bulk source returning a fixed outcome.
#[derive(Clone)]
pub struct MockBulkSource {
    outcome: DomainResult<Vec<SalesRecord>>,
    later: Option<DomainResult<Vec<SalesRecord>>>,
    gate: Option<Arc<Notify>>,
    call_gates: HashMap<usize, Arc<Notify>>,
    calls: Arc<Mutex<usize>>,
}

impl MockBulkSource {
    pub fn ok(records: Vec<SalesRecord>) -> Self {
        Self::with_outcome(Ok(records))
    }

    pub fn failing(err: SalesLensError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: DomainResult<Vec<SalesRecord>>) -> Self {
        Self {
            outcome,
            later: None,
            gate: None,
            call_gates: HashMap::new(),
            calls: Arc::default(),
        }
    }

    /// Serve `records` from the second fetch on.
    pub fn then_ok(mut self, records: Vec<SalesRecord>) -> Self {
        self.later = Some(Ok(records));
        self
    }

    /// Hold every fetch until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Hold only the `call`-th fetch (1-based) until `gate` is notified.
    pub fn gate_call(mut self, call: usize, gate: Arc<Notify>) -> Self {
        self.call_gates.insert(call, gate);
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BulkSource for MockBulkSource {
    async fn fetch_records(&self) -> DomainResult<Vec<SalesRecord>> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if let Some(gate) = self.gate.as_ref().or_else(|| self.call_gates.get(&call)) {
            gate.notified().await;
        }
        match &self.later {
            Some(later) if call > 1 => later.clone(),
            _ => self.outcome.clone(),
        }
    }
}

/// Live source with per-feed outcomes.
#[derive(Clone, Default)]
pub struct MockLiveSource {
    authenticated: bool,
    outcomes: Arc<Mutex<HashMap<String, DomainResult<LiveSnapshot>>>>,
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MockLiveSource {
    pub fn signed_in() -> Self {
        Self { authenticated: true, ..Self::default() }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_feed(self, feed: &str, outcome: DomainResult<LiveSnapshot>) -> Self {
        self.outcomes.lock().unwrap().insert(feed.to_string(), outcome);
        self
    }

    /// Hold fetches of `feed` until `gate` is notified.
    pub fn with_gate(self, feed: &str, gate: Arc<Notify>) -> Self {
        self.gates.lock().unwrap().insert(feed.to_string(), gate);
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl LiveSource for MockLiveSource {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    async fn fetch_snapshot(&self, feed: &FeedHandle) -> DomainResult<LiveSnapshot> {
        self.fetched.lock().unwrap().push(feed.to_string());
        let gate = self.gates.lock().unwrap().get(feed.as_str()).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .get(feed.as_str())
            .cloned()
            .unwrap_or_else(|| Err(SalesLensError::NotFound(format!("feed {feed}"))))
    }
}

/// Sink remembering every appended entry.
#[derive(Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(FeedHandle, AnalysisLogEntry)>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn entries(&self) -> Vec<(FeedHandle, AnalysisLogEntry)> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisLogSink for RecordingSink {
    async fn append_summary(&self, feed: &FeedHandle, entry: &AnalysisLogEntry) -> DomainResult<()> {
        if self.fail {
            return Err(SalesLensError::Network("connection reset".into()));
        }
        self.entries.lock().unwrap().push((feed.clone(), entry.clone()));
        Ok(())
    }
}
