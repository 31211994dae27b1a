//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANALYSIS_LOG_RANGE, DEFAULT_BULK_URL, DEFAULT_HTTP_TIMEOUT_SECS, GOOGLE_SHEETS_API_BASE,
    REALTIME_SALES_RANGE, REFERENCE_RANGE,
};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bulk: BulkSourceConfig,
    #[serde(default)]
    pub live: LiveFeedConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Published workbook (bulk source)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSourceConfig {
    pub url: String,
}

/// Live spreadsheet feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveFeedConfig {
    /// Spreadsheet identifier. `None` means no live feed is expected.
    pub spreadsheet_id: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    #[serde(default = "default_reference_range")]
    pub reference_range: String,
    #[serde(default = "default_sales_range")]
    pub sales_range: String,
    #[serde(default = "default_log_range")]
    pub analysis_log_range: String,
    /// Pre-issued OAuth access token. The OAuth flow itself lives outside
    /// this workspace.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,
}

/// Outbound HTTP behaviour. Requests are never retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

fn default_api_base() -> String {
    GOOGLE_SHEETS_API_BASE.to_string()
}

fn default_reference_range() -> String {
    REFERENCE_RANGE.to_string()
}

fn default_sales_range() -> String {
    REALTIME_SALES_RANGE.to_string()
}

fn default_log_range() -> String {
    ANALYSIS_LOG_RANGE.to_string()
}

impl Default for LiveFeedConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            api_base_url: default_api_base(),
            reference_range: default_reference_range(),
            sales_range: default_sales_range(),
            analysis_log_range: default_log_range(),
            access_token: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS, user_agent: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "info".to_string(), json: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bulk: BulkSourceConfig { url: DEFAULT_BULK_URL.to_string() },
            live: LiveFeedConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
