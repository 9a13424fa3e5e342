//! State of one view's fetch-state lifecycle.

use crate::ui::mvi::UiState;

/// Tag identifying one load trigger (mount or parameter change).
pub type Generation = u64;

/// Lifecycle of a single GET request owned by a view.
///
/// ```text
/// Idle ──Start──→ Loading ──Succeeded──→ Loaded
///                    └──────Failed─────→ Failed
/// ```
///
/// Every non-idle variant remembers the generation that produced it so late
/// responses from an earlier trigger can be recognised and dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet, or the view was unmounted.
    Idle,

    /// Request in flight.
    Loading { generation: Generation },

    /// Response decoded and stored verbatim.
    Loaded { generation: Generation, data: T },

    /// Request failed; `message` is what the user sees.
    Failed {
        generation: Generation,
        message: String,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Generation of the current trigger, if any.
    pub fn generation(&self) -> Option<Generation> {
        match self {
            Self::Idle => None,
            Self::Loading { generation }
            | Self::Loaded { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }

    /// True when a result tagged `generation` may still be applied.
    pub fn awaits(&self, generation: Generation) -> bool {
        matches!(self, Self::Loading { generation: current } if *current == generation)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}
