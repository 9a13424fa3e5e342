//! Background loader: performs the HTTP requests views ask for.
//!
//! The UI thread never awaits. It sends a [`UiCommand`] and later receives a
//! [`LoadOutcome`] through the sink, tagged with the generation that asked
//! for it. A new load for a view aborts that view's previous request.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::api::{ApiClient, ApiError, BookDetail, BookId, BookSummary, Quote};
use crate::shutdown::ShutdownHandle;
use crate::ui::fetch::Generation;

/// Capacity of the command channel.
pub const LOADER_BUFFER: usize = 16;

/// Which view a request belongs to. At most one request per slot is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSlot {
    Books,
    Detail,
    Quotes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadRequest {
    Books,
    Book { id: BookId },
    Quotes { count: usize },
}

impl LoadRequest {
    pub fn slot(&self) -> ViewSlot {
        match self {
            LoadRequest::Books => ViewSlot::Books,
            LoadRequest::Book { .. } => ViewSlot::Detail,
            LoadRequest::Quotes { .. } => ViewSlot::Quotes,
        }
    }

    async fn execute(self, client: &ApiClient) -> LoadPayload {
        match self {
            LoadRequest::Books => LoadPayload::Books(client.books().await),
            LoadRequest::Book { id } => LoadPayload::Book(client.book(&id).await),
            LoadRequest::Quotes { count } => {
                LoadPayload::Quotes(client.random_quotes(count).await)
            }
        }
    }
}

#[derive(Debug)]
pub enum UiCommand {
    Load {
        generation: Generation,
        request: LoadRequest,
    },
    /// View unmounted; drop whatever it was waiting for.
    Cancel { slot: ViewSlot },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug)]
pub enum LoadPayload {
    Books(Result<Vec<BookSummary>, ApiError>),
    Book(Result<BookDetail, ApiError>),
    Quotes(Result<Vec<Quote>, ApiError>),
}

impl LoadPayload {
    pub fn slot(&self) -> ViewSlot {
        match self {
            LoadPayload::Books(_) => ViewSlot::Books,
            LoadPayload::Book(_) => ViewSlot::Detail,
            LoadPayload::Quotes(_) => ViewSlot::Quotes,
        }
    }
}

/// A finished request, tagged with the generation that triggered it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub generation: Generation,
    pub payload: LoadPayload,
}

/// Where finished requests are delivered.
pub type LoadSink = Arc<dyn Fn(LoadOutcome) + Send + Sync>;

/// Create the command channel.
pub fn channel() -> (UiCommandSender, mpsc::Receiver<UiCommand>) {
    mpsc::channel(LOADER_BUFFER)
}

/// Run the loader until the command channel closes or shutdown is signaled.
///
/// Must be called from within a tokio runtime.
pub fn spawn_loader(
    client: ApiClient,
    mut commands: mpsc::Receiver<UiCommand>,
    sink: LoadSink,
    shutdown: ShutdownHandle,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight: HashMap<ViewSlot, AbortHandle> = HashMap::new();

        loop {
            let command = tokio::select! {
                command = commands.recv() => command,
                _ = shutdown.wait() => None,
            };
            let Some(command) = command else {
                break;
            };

            match command {
                UiCommand::Load {
                    generation,
                    request,
                } => {
                    let slot = request.slot();
                    if let Some(previous) = in_flight.remove(&slot) {
                        if !previous.is_finished() {
                            tracing::debug!(?slot, generation, "Aborting superseded request");
                            previous.abort();
                        }
                    }

                    tracing::debug!(?slot, generation, ?request, "Loading");
                    let client = client.clone();
                    let sink = Arc::clone(&sink);
                    let task = tokio::spawn(async move {
                        let payload = request.execute(&client).await;
                        sink(LoadOutcome {
                            generation,
                            payload,
                        });
                    });
                    in_flight.insert(slot, task.abort_handle());
                }
                UiCommand::Cancel { slot } => {
                    if let Some(previous) = in_flight.remove(&slot) {
                        tracing::debug!(?slot, "Cancelling request of unmounted view");
                        previous.abort();
                    }
                }
            }
        }

        for (_, task) in in_flight.drain() {
            task.abort();
        }
        tracing::debug!("Loader stopped");
    })
}
