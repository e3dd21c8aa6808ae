//! `/auth` routing.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Account endpoints. Both are public; a bearer token is something you
/// get here, not something you bring.
///
/// ```text
/// POST /signup  -> signup
/// POST /login   -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}
