//! Fetch-state lifecycle shared by every view.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Idle / Loading / Loaded / Failed, tagged with a generation
//! - `intent.rs` - Start, results, unmount
//! - `reducer.rs` - Transitions; results for a stale generation are dropped

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchState, Generation};
