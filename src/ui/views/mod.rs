//! The three routed views and the error policy each one applies.
//!
//! Rendering is a pure function of fetch state plus a little cursor state
//! (selection, scroll) owned by the `App`.

pub mod books;
pub mod detail;
pub mod quotes;

use crate::api::ApiError;
use crate::ui::fetch::{FetchIntent, Generation};

/// What a view does with a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log it and show an empty result set (books, quotes).
    Swallow,
    /// Show the error message instead of content (book detail).
    Surface,
}

/// Turn a finished request into the intent its view should receive.
pub fn settle<T: Default>(
    policy: ErrorPolicy,
    view: &'static str,
    generation: Generation,
    result: Result<T, ApiError>,
) -> FetchIntent<T> {
    match result {
        Ok(data) => FetchIntent::Succeeded { generation, data },
        Err(err) => {
            tracing::error!(
                view,
                generation,
                kind = err.kind(),
                status = err.status(),
                error = %err,
                "Error fetching {}",
                view
            );
            match policy {
                ErrorPolicy::Swallow => FetchIntent::Succeeded {
                    generation,
                    data: T::default(),
                },
                ErrorPolicy::Surface => FetchIntent::Failed {
                    generation,
                    message: err.to_string(),
                },
            }
        }
    }
}
