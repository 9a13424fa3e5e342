//! HTTP access to the Seuss Treasury API.
//!
//! Three read-only endpoints, no auth, no retries:
//!
//! - `GET /api/books`
//! - `GET /api/books/{id}`
//! - `GET /api/quotes/random/{count}`

mod client;
mod error;
mod types;

pub use client::{ApiClient, RANDOM_QUOTE_COUNT};
pub use error::ApiError;
pub use types::{BookDetail, BookId, BookSummary, Quote, FALLBACK_AUTHOR};
