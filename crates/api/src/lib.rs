//! # SalesLens App
//!
//! Application layer - context wiring, commands and the `saleslens` binary.
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP-backed sources into `HistoryService`

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
