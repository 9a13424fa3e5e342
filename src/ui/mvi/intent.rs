//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, address bar edits)
/// - System events (load results arriving from the loader)
/// - View lifecycle (mount, unmount)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
