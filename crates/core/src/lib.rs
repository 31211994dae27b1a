//! # SalesLens Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Record normalization of raw spreadsheet rows
//! - The bulk/live merge engine, readiness tracking and the history store
//! - Call and customer matching
//! - Port interfaces (traits) for the sources and the analysis log
//!
//! ## Architecture Principles
//! - Only depends on `saleslens-domain`
//! - No HTTP, file or spreadsheet decoding code
//! - All external dependencies via traits

pub mod analysis;
pub mod customers;
pub mod history;
pub mod matching;
pub mod normalize;

pub use analysis::{AnalysisLogSink, AnalysisRecorder};
pub use customers::{records_for_phone, search_customers, summarize_customers, CustomerSummary};
pub use history::ports::{BulkSource, LiveSource};
pub use history::{
    canonical_key, merge_histories, BulkTicket, HistoryService, HistoryStore, HistoryView,
    LiveTicket, ReadinessTracker,
};
pub use matching::{match_call, CallContext, CallMatch, CustomerHistoryEntry};
pub use normalize::{normalize_row, parse_number, parse_sale_date, RecordNormalizer};
