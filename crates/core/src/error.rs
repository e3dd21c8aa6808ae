//! Error taxonomy shared by every layer of the workspace.
//!
//! Lower layers raise the most specific applicable kind; only the HTTP
//! surface translates kinds into status codes.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. `key` is whatever the caller
    /// looked the entity up by (numeric id, title, email).
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The external metadata provider failed at the transport level
    /// (network error, timeout, non-2xx). Distinct from `NotFound`,
    /// which is a legitimate lookup outcome.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the common "looked up by id, nothing there" case.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
