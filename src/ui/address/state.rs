//! State for the address bar.

use crate::ui::mvi::UiState;

/// One-line location editor shown over the footer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddressBarState {
    #[default]
    Hidden,
    Editing { buffer: String },
}

impl UiState for AddressBarState {}

impl AddressBarState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Text typed so far, if editing.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Editing { buffer } => Some(buffer),
            Self::Hidden => None,
        }
    }
}
