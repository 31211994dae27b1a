//! Call resolution

use saleslens_core::CallContext;
use saleslens_domain::{parse_call_filename, Result, SalesLensError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Parse a recording filename and build its analysis context from the
/// currently loaded history.
///
/// # Errors
/// `InvalidInput` when the filename does not follow the recorder naming
/// convention.
pub async fn resolve_call(ctx: &AppContext, filename: &str) -> Result<CallContext> {
    execute_logged("calls::resolve_call", move || async move {
        let call = parse_call_filename(filename).ok_or_else(|| {
            SalesLensError::InvalidInput(format!("unrecognised recording filename: {filename}"))
        })?;
        Ok(ctx.history.call_context(Some(&call)))
    })
    .await
}
