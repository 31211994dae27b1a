//! # SalesLens Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client with timeout (and optional retry) support
//! - The bulk workbook source (download + `calamine` decoding)
//! - The Google Sheets live source and analysis log sink
//! - Configuration loading and logging bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `saleslens-core`
//! - Contains all "impure" code (network I/O, file access)

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod sources;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::init_logging;
pub use sources::{AccessTokenProvider, GoogleSheetsSource, StaticTokenProvider, WorkbookSource};
