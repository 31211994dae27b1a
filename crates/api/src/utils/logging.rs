//! Structured command logging

use std::time::Duration;

use saleslens_domain::SalesLensError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"calls::resolve_call"`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Stable label for an error, used in log fields.
#[inline]
pub fn error_label(error: &SalesLensError) -> &'static str {
    error.label()
}
