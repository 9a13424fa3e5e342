//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// The only place where view state changes.
///
/// Implementations are pure `(State, Intent) -> State` functions: no I/O, no
/// clocks, no channels. Anything asynchronous happens outside and comes back
/// in as another intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Fold one intent into the state.
    ///
    /// Intents that do not apply to the current state must return it
    /// unchanged rather than panic.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
