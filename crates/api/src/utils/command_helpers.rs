//! Command execution helpers

use std::future::Future;
use std::time::Instant;

use saleslens_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Run a command, timing it and logging the outcome.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn resolve_call(ctx: &AppContext, filename: &str) -> Result<CallContext> {
///     execute_logged("calls::resolve_call", || async {
///         // command logic
///     })
///     .await
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);

    result
}
