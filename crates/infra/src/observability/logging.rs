//! `tracing` subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured filter so operators can
//! raise verbosity without touching the config file.

use saleslens_domain::{LoggingConfig, Result, SalesLensError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Resolve the active filter: `RUST_LOG` if set and valid, else the
/// configured directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| {
        SalesLensError::Config(format!("Invalid log filter '{}': {}", config.filter, e))
    })
}

/// Install the global subscriber. Call once at startup. Events are written to
/// stderr.
///
/// # Errors
/// Returns `SalesLensError::Config` for an invalid filter, or
/// `SalesLensError::Internal` if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true).with_writer(std::io::stderr)).try_init()
    };

    installed.map_err(|e| SalesLensError::Internal(format!("logging already initialised: {}", e)))
}
