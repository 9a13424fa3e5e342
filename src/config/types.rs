use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how to reach the Seuss Treasury API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host of the API (e.g., "https://seussology.info").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Unset means requests may hang forever.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds while idle (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to `<cache_dir>/seuss-treasury/seuss.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://seussology.info".to_string()
}

fn default_user_agent() -> String {
    format!("seuss-treasury/{}", env!("CARGO_PKG_VERSION"))
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file location.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("seuss-treasury")
                .join("seuss.log")
        })
    }
}
