//! # seuss-treasury
//!
//! A terminal browser for the Seuss Treasury API: book listings, book
//! details and quote cards, behind browser-style path routing.
//!
//! ```text
//! input thread ─┐                        ┌─ GET /api/books
//!               ├─→ AppEvent ─→ App ─→ UiCommand ─→ loader ─┼─ GET /api/books/{id}
//! loader sink ──┘                        └─ GET /api/quotes/random/10
//! ```
//!
//! - [`api`]: reqwest client and wire types
//! - [`router`]: route table and navigation history
//! - [`loader`]: async request execution with abort-on-supersede
//! - [`ui`]: ratatui views, fetch-state lifecycle, input handling

pub mod api;
pub mod config;
pub mod loader;
pub mod logging;
pub mod router;
pub mod shutdown;
pub mod ui;
