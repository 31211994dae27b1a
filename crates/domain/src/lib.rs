//! # SalesLens Domain
//!
//! Business domain types and models for SalesLens.
//!
//! This crate contains:
//! - Sales records, raw spreadsheet rows, salespersons and call metadata
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (spreadsheet column headers, sheet ranges)
//! - Phone canonicalization and the call recording filename parser
//!
//! ## Architecture
//! - No dependencies on other SalesLens crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
// Re-export parsing utilities
pub use utils::call_filename::parse_call_filename;
pub use utils::phone::{digits_only, localize_country_code, PhonePolicy};
