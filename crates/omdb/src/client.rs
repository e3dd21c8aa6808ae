//! HTTP client for OMDb title lookups.

use crate::error::OmdbError;
use crate::models::{LookupPayload, MovieMetadata};

/// Public OMDb endpoint used when `OMDB_API_URL` is not set.
const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Configuration for the OMDb client. Key and endpoint are injected,
/// never computed.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Base URL of the OMDb API.
    pub api_url: String,
    /// API key sent with every request.
    pub api_key: String,
}

impl OmdbConfig {
    /// Load OMDb configuration from environment variables.
    ///
    /// | Env Var        | Required | Default                      |
    /// |----------------|----------|------------------------------|
    /// | `OMDB_API_KEY` | **yes**  | --                           |
    /// | `OMDB_API_URL` | no       | `https://www.omdbapi.com/`   |
    ///
    /// # Panics
    ///
    /// Panics if `OMDB_API_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("OMDB_API_KEY").expect("OMDB_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "OMDB_API_KEY must not be empty");

        let api_url =
            std::env::var("OMDB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self { api_url, api_key }
    }
}

/// HTTP client for the OMDb API.
pub struct OmdbClient {
    client: reqwest::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Create a new client with its own connection pool.
    pub fn new(config: OmdbConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: OmdbConfig) -> Self {
        Self { client, config }
    }

    /// Look up a movie by title.
    ///
    /// Sends exactly one `GET ?t=<title>&apikey=<key>` request; there are
    /// no retries, so a failure reaches the caller immediately. An empty
    /// or whitespace-only title fails before any request is sent.
    pub async fn lookup_by_title(&self, title: &str) -> Result<MovieMetadata, OmdbError> {
        if title.trim().is_empty() {
            return Err(OmdbError::EmptyTitle);
        }

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("t", title), ("apikey", self.config.api_key.as_str())])
            .send()
            .await?;

        let payload: LookupPayload = Self::parse_response(response).await?;
        if !payload.is_found() {
            tracing::debug!(
                title,
                provider_message = payload.error.as_deref().unwrap_or("none"),
                "OMDb has no entry for title"
            );
            return Err(OmdbError::NotFound(title.to_string()));
        }

        Ok(payload.metadata)
    }

    // ---- private helpers ----

    /// Gate on the HTTP status. Non-2xx responses are drained into an
    /// [`OmdbError::Api`] so the caller sees what the provider said.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OmdbError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Status-check a response and decode its JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OmdbError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OmdbConfig {
        OmdbConfig {
            api_url: "http://127.0.0.1:1/".to_string(),
            api_key: "test-key".to_string(),
        }
    }

    #[tokio::test]
    async fn empty_title_fails_without_network() {
        // The configured endpoint is unreachable, so reaching the network
        // would fail with Request, not EmptyTitle.
        let client = OmdbClient::new(test_config());
        let err = client.lookup_by_title("").await.unwrap_err();
        assert!(matches!(err, OmdbError::EmptyTitle));

        let err = client.lookup_by_title("   ").await.unwrap_err();
        assert!(matches!(err, OmdbError::EmptyTitle));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        let client = OmdbClient::new(test_config());
        let err = client.lookup_by_title("Inception").await.unwrap_err();
        assert!(matches!(err, OmdbError::Request(_)));
    }
}
