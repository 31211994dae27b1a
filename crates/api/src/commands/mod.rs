//! Application commands
//!
//! Each command logs its outcome through
//! [`execute_logged`](crate::utils::command_helpers::execute_logged).

pub mod analysis;
pub mod calls;
pub mod customers;
pub mod history;

pub use analysis::record_analysis;
pub use calls::resolve_call;
pub use customers::{customer_history, find_customers};
pub use history::{connect_live_feed, history_summary, load_history, refresh_bulk};
