//! Customer directory commands

use saleslens_core::{records_for_phone, search_customers, summarize_customers, CustomerSummary};
use saleslens_domain::{digits_only, Result, SalesLensError, SalesRecord};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

/// Customers matching `term` by phone digits, name or Facebook name.
pub async fn find_customers(ctx: &AppContext, term: &str) -> Result<Vec<CustomerSummary>> {
    execute_logged("customers::find_customers", move || async move {
        let view = ctx.history.snapshot();
        let customers = summarize_customers(&view.records);
        Ok(search_customers(&customers, term).into_iter().cloned().collect())
    })
    .await
}

/// Purchase history of one phone, newest first.
pub async fn customer_history(ctx: &AppContext, phone: &str) -> Result<Vec<SalesRecord>> {
    execute_logged("customers::customer_history", move || async move {
        let phone = digits_only(phone);
        if phone.is_empty() {
            return Err(SalesLensError::InvalidInput("phone must contain digits".into()));
        }
        Ok(records_for_phone(&ctx.history.snapshot().records, &phone))
    })
    .await
}
