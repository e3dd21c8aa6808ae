/// Errors from the OMDb client.
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OMDb returned a non-2xx status code.
    #[error("OMDb API error ({status}): {body}")]
    Api {
        /// Status the provider answered with.
        status: u16,
        /// Body text, kept for the logs.
        body: String,
    },

    /// The provider has no entry for the requested title. A legitimate
    /// lookup outcome, not a transport failure.
    #[error("No movie found for title '{0}'")]
    NotFound(String),

    /// The caller passed an empty or whitespace-only title. Failing
    /// here means no request is ever sent.
    #[error("Lookup title must not be empty")]
    EmptyTitle,
}
