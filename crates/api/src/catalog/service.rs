//! Catalog operations behind the `/movie` resource.

use std::sync::Arc;

use cinelist_core::error::CoreError;
use cinelist_core::pagination::{PageRequest, PagingResult};
use cinelist_core::types::DbId;
use cinelist_db::models::movie::{CreateMovie, Movie, MovieView};
use cinelist_db::repositories::MovieRepo;
use cinelist_db::DbPool;
use cinelist_omdb::{OmdbClient, OmdbError};

use crate::catalog::mapper;
use crate::error::{AppError, AppResult};

/// Orchestrates provider lookups, mapping, and storage for the movie
/// catalog.
///
/// Constructed once at startup with its collaborators and shared through
/// [`crate::state::AppState`]; immutable afterwards.
#[derive(Clone)]
pub struct CatalogService {
    pool: DbPool,
    omdb: Arc<OmdbClient>,
}

impl CatalogService {
    /// Build the service from its collaborators.
    pub fn new(pool: DbPool, omdb: OmdbClient) -> Self {
        Self {
            pool,
            omdb: Arc::new(omdb),
        }
    }

    /// Store a new movie record.
    ///
    /// A duplicate title surfaces as a conflict via the storage
    /// constraint; the loser of a concurrent race for the same title
    /// observes the same outcome.
    pub async fn create(&self, input: &CreateMovie) -> AppResult<Movie> {
        let movie = MovieRepo::create(&self.pool, input).await?;
        Ok(movie)
    }

    /// Look a title up at the metadata provider and store the result.
    ///
    /// Lookup, mapping, and the insert run in that order; nothing is
    /// written unless both earlier steps fully succeeded. The insert is
    /// a single statement, so there is no partial record to roll back.
    pub async fn enrich_and_save(&self, title: &str) -> AppResult<Movie> {
        let metadata = self
            .omdb
            .lookup_by_title(title)
            .await
            .map_err(map_omdb_error)?;

        let record = mapper::metadata_to_record(metadata)?;
        let movie = MovieRepo::create(&self.pool, &record).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Stored enriched movie");
        Ok(movie)
    }

    /// List every movie, newest first. Suitable for small datasets only.
    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        let movies = MovieRepo::list(&self.pool).await?;
        Ok(movies)
    }

    /// Serve one page of the catalog as public views.
    ///
    /// The request is validated before any storage access; totals in the
    /// returned envelope come from the storage scan, not from counting
    /// the page content.
    pub async fn list_paginated(
        &self,
        request: &PageRequest,
    ) -> AppResult<PagingResult<MovieView>> {
        request.validate()?;

        let (rows, total) = MovieRepo::list_page(&self.pool, request).await?;
        Ok(PagingResult::new(rows, total, request).map(mapper::record_to_view))
    }

    /// Fetch a movie by id. `None` is a normal outcome here; only the
    /// HTTP layer decides it is a 404.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Movie>> {
        let movie = MovieRepo::find_by_id(&self.pool, id).await?;
        Ok(movie)
    }

    /// Delete a movie by id. Deleting an id that does not exist is a
    /// reportable not-found, unlike a get miss.
    pub async fn delete_by_id(&self, id: DbId) -> AppResult<()> {
        let deleted = MovieRepo::delete(&self.pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::not_found("Movie", id)))
        }
    }
}

/// Translate provider-client errors into the domain taxonomy.
///
/// A provider miss is a not-found, an empty title never left this
/// process and is a validation failure, and everything else is an
/// upstream failure whose detail goes to the log, not the client.
fn map_omdb_error(err: OmdbError) -> AppError {
    match err {
        OmdbError::NotFound(title) => AppError::Core(CoreError::not_found("Movie", title)),
        OmdbError::EmptyTitle => AppError::Core(CoreError::Validation(err.to_string())),
        OmdbError::Request(_) | OmdbError::Api { .. } => {
            AppError::Core(CoreError::Upstream(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn provider_miss_becomes_not_found() {
        let err = map_omdb_error(OmdbError::NotFound("Nonexistent Film".to_string()));
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound { entity: "Movie", key }) => {
                assert_eq!(key, "Nonexistent Film");
            }
        );
    }

    #[test]
    fn empty_title_becomes_validation() {
        let err = map_omdb_error(OmdbError::EmptyTitle);
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[test]
    fn provider_status_failure_becomes_upstream() {
        let err = map_omdb_error(OmdbError::Api {
            status: 503,
            body: "maintenance".to_string(),
        });
        assert_matches!(err, AppError::Core(CoreError::Upstream(msg)) => {
            assert!(msg.contains("503"), "upstream message should carry the status, got: {msg}");
        });
    }
}
