use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{BookDetail, BookId, BookSummary, Quote};
use crate::config::ApiConfig;

/// Number of quotes requested by the quotes view.
pub const RANDOM_QUOTE_COUNT: usize = 10;

/// Thin GET-only client for the Seuss Treasury REST API.
///
/// Cheap to clone: the underlying reqwest client is reference counted.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/books`
    pub async fn books(&self) -> Result<Vec<BookSummary>, ApiError> {
        self.get_json("books", "/api/books").await
    }

    /// `GET /api/books/{id}`
    pub async fn book(&self, id: &BookId) -> Result<BookDetail, ApiError> {
        self.get_json("book details", &format!("/api/books/{}", id))
            .await
    }

    /// `GET /api/quotes/random/{count}`
    pub async fn random_quotes(&self, count: usize) -> Result<Vec<Quote>, ApiError> {
        self.get_json("quotes", &format!("/api/quotes/random/{}", count))
            .await
    }

    /// Build the absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        what: &'static str,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.url_for(path)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Network {
                what,
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                what,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            what,
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = client_for("https://seussology.info/");
        assert_eq!(client.base_url(), "https://seussology.info");
        assert_eq!(
            client.url_for("/api/books").unwrap().as_str(),
            "https://seussology.info/api/books"
        );
    }

    #[test]
    fn book_id_is_placed_in_path() {
        let client = client_for("http://127.0.0.1:9000");
        let url = client
            .url_for(&format!("/api/books/{}", BookId::from("7")))
            .unwrap();
        assert_eq!(url.path(), "/api/books/7");
    }

    #[test]
    fn garbage_base_url_is_reported() {
        let client = client_for("not a url");
        let err = client.url_for("/api/books").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }
}
