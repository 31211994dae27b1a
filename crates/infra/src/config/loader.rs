//! Configuration loader
//!
//! ## Loading Strategy
//! 1. If `SALESLENS_BULK_URL` is set, load from `SALESLENS_*` environment
//!    variables; any malformed variable is an error
//! 2. Otherwise fall back to a config file
//! 3. Probe multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! - `SALESLENS_BULK_URL`: published workbook URL (required)
//! - `SALESLENS_SHEET_ID`: live spreadsheet id
//! - `SALESLENS_SHEETS_TOKEN`: OAuth access token for the live feed
//! - `SALESLENS_SHEETS_API_BASE`: Sheets API base URL
//! - `SALESLENS_HTTP_TIMEOUT_SECS`: per-request timeout
//! - `SALESLENS_LOG_FILTER`: default log filter directive
//! - `SALESLENS_LOG_JSON`: emit JSON logs (true/false)
//!
//! ## File Locations
//! `config.{json,toml}` and `saleslens.{json,toml}` in the working directory,
//! its two parents, and next to the executable.

use std::path::{Path, PathBuf};

use saleslens_domain::{BulkSourceConfig, Config, Result, SalesLensError};

/// Load configuration from the environment when `SALESLENS_BULK_URL` is set,
/// otherwise from a config file.
///
/// # Errors
/// Returns `SalesLensError::Config` if the selected source does not yield a
/// valid configuration.
pub fn load() -> Result<Config> {
    if env_opt("SALESLENS_BULK_URL").is_none() {
        tracing::debug!("SALESLENS_BULK_URL not set, loading config file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables.
///
/// Only `SALESLENS_BULK_URL` is required; everything else falls back to the
/// defaults of [`Config`].
///
/// # Errors
/// Returns `SalesLensError::Config` if the bulk URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let bulk_url = env_var("SALESLENS_BULK_URL")?;
    validate_url("SALESLENS_BULK_URL", &bulk_url)?;

    let mut config = Config { bulk: BulkSourceConfig { url: bulk_url }, ..Config::default() };

    config.live.spreadsheet_id = env_opt("SALESLENS_SHEET_ID");
    config.live.access_token = env_opt("SALESLENS_SHEETS_TOKEN");
    if let Some(base) = env_opt("SALESLENS_SHEETS_API_BASE") {
        validate_url("SALESLENS_SHEETS_API_BASE", &base)?;
        config.live.api_base_url = base;
    }

    if let Some(raw) = env_opt("SALESLENS_HTTP_TIMEOUT_SECS") {
        config.http.timeout_seconds = raw
            .parse::<u64>()
            .map_err(|e| SalesLensError::Config(format!("Invalid HTTP timeout: {}", e)))?;
    }

    if let Some(filter) = env_opt("SALESLENS_LOG_FILTER") {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool("SALESLENS_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension.
///
/// # Errors
/// Returns `SalesLensError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SalesLensError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SalesLensError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SalesLensError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate_url("bulk.url", &config.bulk.url)?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SalesLensError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SalesLensError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SalesLensError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations and return the first config file found.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
        roots.push(cwd.join("../.."));
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| {
            ["config.json", "config.toml", "saleslens.json", "saleslens.toml"]
                .into_iter()
                .map(move |name| root.join(name))
        })
        .find(|path| path.exists())
}

fn validate_url(key: &str, value: &str) -> Result<()> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| SalesLensError::Config(format!("Invalid URL in {}: {}", key, e)))
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SalesLensError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
