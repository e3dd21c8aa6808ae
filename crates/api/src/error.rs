//! HTTP error translation.
//!
//! Handlers return [`AppResult`]; any [`AppError`] that escapes becomes a
//! JSON body of the form `{"error": <message>, "code": <CODE>}`. Messages
//! for 5xx responses are sanitized, the underlying detail goes to the log
//! instead of the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinelist_core::error::CoreError;
use serde_json::json;

/// Status, machine-readable code, and client-facing message.
type ErrorParts = (StatusCode, &'static str, String);

/// Error type returned by every handler in this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error bubbled up from `cinelist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage error bubbled up from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request the client can fix, with a message safe to return.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure whose detail must not reach the client.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(db) => storage_response(db),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

/// Translate a domain error into its HTTP shape.
///
/// `Validation`, `Conflict`, and `Unauthorized` carry messages written
/// for the client, so those pass through verbatim. `Upstream` and
/// `Internal` detail is logged and replaced.
fn core_response(err: &CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { entity, key } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with key {key} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Upstream(msg) => {
            tracing::error!(error = %msg, "Upstream provider error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Metadata provider request failed".to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal()
        }
    }
}

/// Translate a sqlx error into its HTTP shape.
///
/// `RowNotFound` is a plain 404. A Postgres 23505 on one of our `uq_`
/// constraints is a 409. Anything else, including the `ColumnNotFound`
/// produced by an unknown sort column, is treated as an internal failure.
fn storage_response(err: &sqlx::Error) -> ErrorParts {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db) = err {
        if db.code().as_deref() == Some("23505") {
            if let Some(constraint) = db.constraint().filter(|name| name.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value for unique constraint {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Storage error");
    internal()
}

/// The sanitized 500 every unexpected failure collapses into.
fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
