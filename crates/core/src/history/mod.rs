pub mod merge;
pub mod ports;
pub mod readiness;
pub mod service;
pub mod store;

pub use merge::{canonical_key, merge_histories};
pub use readiness::ReadinessTracker;
pub use service::HistoryService;
pub use store::{BulkTicket, HistoryStore, HistoryView, LiveTicket};
