//! Source bookkeeping: which loader produced what, and how loading is going

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_label_conversions;

/// The two history sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Bulk,
    Live,
}

impl_domain_label_conversions!(SourceKind {
    Bulk => "bulk",
    Live => "live",
});

/// Non-fatal load failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SourceWarning {
    pub source: SourceKind,
    pub message: String,
}

impl SourceWarning {
    pub fn new(source: SourceKind, message: impl Into<String>) -> Self {
        Self { source, message: message.into() }
    }
}

/// Readiness of the merged history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ReadinessState {
    AwaitingBulk,
    AwaitingLiveOrDone,
    Done,
}

impl_domain_label_conversions!(ReadinessState {
    AwaitingBulk => "awaiting_bulk",
    AwaitingLiveOrDone => "awaiting_live_or_done",
    Done => "done",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_labels_round_trip() {
        for state in
            [ReadinessState::AwaitingBulk, ReadinessState::AwaitingLiveOrDone, ReadinessState::Done]
        {
            assert_eq!(state.to_string().parse::<ReadinessState>().unwrap(), state);
        }
    }

    #[test]
    fn source_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SourceKind::Live).unwrap(), "\"live\"");
    }
}
