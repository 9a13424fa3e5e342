//! Errors raised by the API client.

use thiserror::Error;

/// Errors that can occur while fetching from the Seuss Treasury API.
///
/// `what` names the resource in user-facing terms ("books", "book details",
/// "quotes") so the message can be shown as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Failed to fetch {what}: {source}")]
    Network {
        what: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Failed to fetch {what} (HTTP {status})")]
    Status {
        what: &'static str,
        url: String,
        status: u16,
    },

    /// The body was not the JSON shape we expected.
    #[error("Failed to read {what}: {source}")]
    Decode {
        what: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Base URL and path did not combine into a valid URL.
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ApiError {
    /// HTTP status code, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-friendly tag for log records.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }
}
