//! Request authentication via a Bearer token extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use cinelist_core::error::CoreError;
use cinelist_core::types::DbId;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::AppState;

/// Identity proven by the `Authorization: Bearer <token>` header.
///
/// Adding this extractor to a handler's signature is what gates the
/// route; no separate middleware layer is involved. Requests without a
/// verifiable token are rejected with 401 before the handler body runs.
///
/// ```ignore
/// async fn delete_movie(user: AuthUser, ...) -> AppResult<StatusCode> {
///     tracing::info!(user_id = user.user_id, "deleting movie");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Database id of the caller (`sub` claim).
    pub user_id: DbId,
    /// Email of the caller (`email` claim).
    pub email: String,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = verify_access_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
