//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SalesLens
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SalesLensError {
    /// A record source could not be fetched (non-2xx, transport failure,
    /// undecodable payload). Loaders degrade this to an empty result.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The live feed is reachable but does not carry the expected headers.
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalesLensError {
    /// Stable label for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(_) => "source_unavailable",
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the error points at misconfiguration rather than transient
    /// unavailability. Only these are surfaced as hard, user-visible errors.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(self, Self::SchemaMismatch(_) | Self::Config(_))
    }
}

/// Result type alias for SalesLens operations
pub type Result<T> = std::result::Result<T, SalesLensError>;
