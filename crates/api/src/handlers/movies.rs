//! Handlers for the `/movie` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinelist_core::error::CoreError;
use cinelist_core::pagination::{
    PageRequest, PagingResult, SortDirection, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD,
};
use cinelist_core::types::DbId;
use cinelist_db::models::movie::{Movie, MovieView};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /movie`.
///
/// Every parameter is optional; defaults match the documented paging
/// defaults (page 1, size 10, sorted by `id` descending).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    page: Option<i64>,
    size: Option<i64>,
    sort_field: Option<String>,
    direction: Option<String>,
}

impl ListQuery {
    /// Fold the raw query parameters into a [`PageRequest`].
    ///
    /// The direction string is parsed here so an unknown value fails at
    /// the boundary; the sort field passes through for storage to judge.
    fn into_page_request(self) -> Result<PageRequest, CoreError> {
        let direction = match self.direction.as_deref() {
            Some(raw) => SortDirection::parse(raw)?,
            None => SortDirection::default(),
        };
        Ok(PageRequest {
            page: self.page.unwrap_or(DEFAULT_PAGE),
            size: self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort_field: self
                .sort_field
                .unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            direction,
        })
    }
}

/// Query parameters for `GET /movie/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Title to look up at the metadata provider. A missing parameter is
    /// treated as an empty title and rejected before any lookup.
    #[serde(default)]
    title: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /movie
pub async fn list_paginated(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PagingResult<MovieView>>> {
    let request = query.into_page_request()?;
    let page = state.catalog.list_paginated(&request).await?;
    Ok(Json(page))
}

/// GET /movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .catalog
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Movie", id)))?;
    Ok(Json(movie))
}

/// GET /movie/search?title=...
///
/// Look the title up at the metadata provider and store the result.
pub async fn search(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Movie>> {
    let movie = state.catalog.enrich_and_save(&query.title).await?;
    Ok(Json(movie))
}

/// DELETE /movie/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
