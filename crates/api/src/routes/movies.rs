//! `/movie` routing.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Catalog endpoints, every one behind the bearer-token extractor.
///
/// ```text
/// GET    /         -> list_paginated
/// GET    /search   -> search (enrich from the metadata provider and save)
/// GET    /{id}     -> get_by_id
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_paginated))
        .route("/search", get(movies::search))
        .route("/{id}", get(movies::get_by_id).delete(movies::delete))
}
