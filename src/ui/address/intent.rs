//! Intents for the address bar.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AddressIntent {
    /// Show the bar pre-filled with the current location.
    Open { location: String },
    Insert(char),
    Backspace,
    /// Hide the bar; the caller has already read the buffer.
    Close,
}

impl Intent for AddressIntent {}
