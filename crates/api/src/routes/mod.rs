pub mod auth;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// The authenticated and public API surface, mounted at the root next
/// to `/health`.
///
/// ```text
/// /movie                 list paginated (requires auth)
/// /movie/search          enrich from the metadata provider (requires auth)
/// /movie/{id}            get, delete (requires auth)
///
/// /auth/signup           register (public)
/// /auth/login            login (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movie", movies::router())
        .nest("/auth", auth::router())
}
