use crate::api::ApiClient;
use crate::config::Config;
use crate::loader::{self, LoadSink};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;
use std::time::Duration;

/// Run the terminal UI until the user quits or shutdown is signaled.
///
/// HTTP work is spawned on `runtime`; this thread only draws and reacts.
pub fn run(
    config: &Config,
    initial_location: String,
    runtime: &tokio::runtime::Handle,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let client = ApiClient::new(&config.api)?;
    tracing::info!(base_url = client.base_url(), "Starting UI");

    let events = EventHandler::new(shutdown.clone());
    let sink_tx = events.sender();
    let sink: LoadSink = Arc::new(move |outcome| {
        let _ = sink_tx.send(AppEvent::Loaded(outcome));
    });

    let (command_tx, command_rx) = loader::channel();
    let loader_task = {
        let _guard = runtime.enter();
        loader::spawn_loader(client, command_rx, sink, shutdown.clone())
    };

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(initial_location);
    app.set_loader(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Loaded(outcome)) => app.on_loaded(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    loader_task.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
