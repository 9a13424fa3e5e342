//! Address bar: type a location and jump to it, matched or not.
//!
//! - `state.rs` - Hidden / Editing
//! - `intent.rs` - Open, edits, Close
//! - `reducer.rs` - Transitions
//! - `bar.rs` - Rendering

mod bar;
mod intent;
mod reducer;
mod state;

pub use bar::render_address_bar;
pub use intent::AddressIntent;
pub use reducer::AddressReducer;
pub use state::AddressBarState;
