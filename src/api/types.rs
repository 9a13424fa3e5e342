//! Wire types for the Seuss Treasury API.
//!
//! Decoding is deliberately loose: unknown fields are ignored and missing
//! strings default to empty, so a malformed record renders with holes
//! instead of failing the whole response.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Attribution shown on a quote card when the API omits the author.
pub const FALLBACK_AUTHOR: &str = "Seuss Treasury";

/// Book identifier as it appears in `/book/:id`.
///
/// The API sends numeric ids; routes carry them as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => BookId(n.to_string()),
            RawId::Text(s) => BookId(s),
        })
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Entry of `GET /api/books`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: BookId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Body of `GET /api/books/{id}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Entry of `GET /api/quotes/random/{count}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    /// Author to credit, falling back when absent or blank.
    pub fn attribution(&self) -> &str {
        self.author
            .as_deref()
            .filter(|author| !author.is_empty())
            .unwrap_or(FALLBACK_AUTHOR)
    }
}
