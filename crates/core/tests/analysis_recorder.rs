//! Tests for `AnalysisRecorder`

mod support;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use saleslens_core::AnalysisRecorder;
use saleslens_domain::{AnalysisLogEntry, FeedHandle};
use support::sources::RecordingSink;

fn entry() -> AnalysisLogEntry {
    AnalysisLogEntry {
        timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        salesperson_name: Some("Anan".into()),
        closing_probability: 65.0,
        performance_score: 80.0,
        customer_phone: Some("0898765432".into()),
        next_best_action: "Send price list".into(),
        outcome_summary: "Customer asked for a discount".into(),
    }
}

#[tokio::test]
async fn background_record_reaches_sink() {
    let sink = RecordingSink::default();
    let recorder = AnalysisRecorder::new(Arc::new(sink.clone()));

    recorder.record(FeedHandle::new("sheet-1"), entry()).await.unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, FeedHandle::new("sheet-1"));
    assert_eq!(entries[0].1, entry());
}

#[tokio::test]
async fn sink_failure_is_swallowed() {
    let recorder = AnalysisRecorder::new(Arc::new(RecordingSink::failing()));

    assert!(!recorder.record_now(&FeedHandle::new("sheet-1"), &entry()).await);
    // The background task completes without panicking.
    recorder.record(FeedHandle::new("sheet-1"), entry()).await.unwrap();
}
