//! Configuration: TOML file on disk, serde defaults, CLI overrides on top.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};

use std::path::PathBuf;

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides and re-validate the result.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(base_url) = overrides.base_url {
            self.api.base_url = base_url;
        }
        if let Some(log_file) = overrides.log_file {
            self.logging.file = Some(log_file);
        }
        self.validate()?;
        Ok(self)
    }
}
