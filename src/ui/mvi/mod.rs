//! Model-View-Intent (MVI) primitives shared by every stateful view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key / load result ───┘
//! ```
//!
//! - **State**: everything a widget needs to draw itself
//! - **Intent**: a key press, a navigation, or a finished HTTP request
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
