//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use seuss_treasury::api::ApiClient;
use seuss_treasury::config::ApiConfig;
use seuss_treasury::ui::app::App;
use seuss_treasury::ui::render::draw;
use std::path::PathBuf;
use tempfile::TempDir;

/// API client pointed at `base_url` with default settings.
pub fn client_for(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    ApiClient::new(&config).expect("Failed to build client")
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Rendering helpers --------------------------------------------------------

/// Draw the whole app into an off-screen buffer.
pub fn render_app(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as text, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

pub fn render_text(app: &App, width: u16, height: u16) -> String {
    buffer_text(&render_app(app, width, height))
}
