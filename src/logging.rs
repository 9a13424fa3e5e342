//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so records go to a file instead of
//! stderr. Swallowed fetch errors end up here too.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. Returns the log file in use.
///
/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
