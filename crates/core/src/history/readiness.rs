//! Readiness of the merged history
//!
//! The history is complete once the bulk load has settled and, when a live
//! load is expected, the live load has settled too. A settle counts whether
//! the load succeeded or failed.

use saleslens_domain::ReadinessState;

#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    bulk_settled: bool,
    live_expected: bool,
    live_settled: bool,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bulk (re)load has started.
    pub fn bulk_started(&mut self) {
        self.bulk_settled = false;
    }

    pub fn bulk_settled(&mut self) {
        self.bulk_settled = true;
    }

    /// Declare whether a live load is pending. Passing `true` re-opens a
    /// finished tracker until the new live load settles.
    pub fn expect_live(&mut self, expected: bool) {
        self.live_expected = expected;
        self.live_settled = false;
    }

    /// A live load settled. Remembered even if bulk is still pending.
    pub fn live_settled(&mut self) {
        self.live_settled = true;
    }

    pub fn state(&self) -> ReadinessState {
        if !self.bulk_settled {
            ReadinessState::AwaitingBulk
        } else if self.live_expected && !self.live_settled {
            ReadinessState::AwaitingLiveOrDone
        } else {
            ReadinessState::Done
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state() != ReadinessState::Done
    }

    pub fn is_done(&self) -> bool {
        !self.is_loading()
    }
}
