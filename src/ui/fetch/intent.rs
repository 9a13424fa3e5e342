//! Intents for the fetch-state lifecycle.

use crate::ui::mvi::Intent;

use super::state::Generation;

/// Events that move a view's request through its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchIntent<T> {
    /// View mounted or its route parameter changed.
    Start { generation: Generation },

    /// Response arrived and decoded.
    Succeeded { generation: Generation, data: T },

    /// Request failed with a user-facing message.
    Failed {
        generation: Generation,
        message: String,
    },

    /// View left the screen; its data is discarded.
    Unmount,
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}

impl<T> FetchIntent<T> {
    /// Generation the intent refers to (`Unmount` has none).
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Start { generation }
            | Self::Succeeded { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
            Self::Unmount => None,
        }
    }
}
