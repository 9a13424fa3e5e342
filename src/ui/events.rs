use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::loader::LoadOutcome;
use crate::shutdown::ShutdownHandle;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A request issued by the loader finished (successfully or not).
    Loaded(LoadOutcome),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Event channel without an input thread. Used by tests and headless runs.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Start the crossterm input thread.
    ///
    /// The thread polls in short slices so it notices shutdown promptly.
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let handler = Self::detached();
        let event_tx = handler.tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    match event::poll(INPUT_POLL) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                                Ok(Event::Resize(cols, rows)) => {
                                    event_tx.send(AppEvent::Resize(cols, rows))
                                }
                                Ok(_) => Ok(()),
                                Err(err) => {
                                    tracing::error!(error = %err, "Terminal read failed");
                                    break;
                                }
                            };
                            if forwarded.is_err() {
                                break;
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    }
                }
            })
            .map_err(|err| tracing::error!(error = %err, "Failed to spawn input thread"))
            .ok();

        handler
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
