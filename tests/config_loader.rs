//! Tests for config loading, validation and CLI overrides.

mod common;

use common::temp_config;
use seuss_treasury::config::{Config, ConfigError, Overrides};
use std::path::PathBuf;
use tempfile::TempDir;

/// A missing config file yields the defaults.
#[test]
fn missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "https://seussology.info");
    assert_eq!(config.api.request_timeout_seconds, None);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
}

/// Sections and fields left out fall back to their defaults.
#[test]
fn partial_file_is_filled_in() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "http://localhost:8080/"
request_timeout_seconds = 5

[logging]
level = "debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:8080/");
    assert_eq!(config.api.request_timeout_seconds, Some(5));
    assert!(config.api.user_agent.starts_with("seuss-treasury/"));
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_none());
}

/// Broken TOML is reported with the offending path.
#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// Only http and https base URLs are accepted.
#[test]
fn non_http_base_url_is_rejected() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://seussology.info\"\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("api.base_url"));
            assert!(message.contains("ftp"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("tick_rate_ms")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Command-line values win over the file and are validated too.
#[test]
fn overrides_take_precedence() {
    let config = Config::default()
        .with_overrides(Overrides {
            base_url: Some("http://127.0.0.1:3000".into()),
            log_file: Some(PathBuf::from("/tmp/seuss-test.log")),
        })
        .unwrap();

    assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
    assert_eq!(config.logging.file_path(), PathBuf::from("/tmp/seuss-test.log"));

    let err = Config::default()
        .with_overrides(Overrides {
            base_url: Some("not a url".into()),
            log_file: None,
        })
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn default_log_file_lives_under_app_dir() {
    let path = Config::default().logging.file_path();
    assert!(path.ends_with("seuss-treasury/seuss.log"));
}
