//! Movie entity model and DTOs.

use cinelist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full movie row from the `movies` table.
///
/// Single-item fetches return this shape directly; paginated listings
/// project it down to [`MovieView`] first.
///
/// Every domain column is free text straight from the metadata provider:
/// `year` may hold a range, `runtime` carries units ("162 min"), `genre`
/// and `actors` are comma-joined lists.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: Option<String>,
    pub poster: String,
    pub imdb_rating: Option<String>,
    pub r#type: String,
    pub box_office: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new movie.
///
/// Carries no id and no timestamps; storage assigns both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: Option<String>,
    pub poster: String,
    pub imdb_rating: Option<String>,
    pub r#type: String,
    pub box_office: Option<String>,
}

/// Public listing shape: the movie's domain fields without id or
/// timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: Option<String>,
    pub poster: String,
    pub imdb_rating: Option<String>,
    pub r#type: String,
    pub box_office: Option<String>,
}
