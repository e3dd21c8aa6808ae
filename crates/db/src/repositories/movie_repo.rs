//! Queries against the `movies` table.

use cinelist_core::pagination::PageRequest;
use cinelist_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Every query selects the same columns so `Movie` always hydrates fully.
const MOVIE_COLUMNS: &str = "id, title, year, runtime, genre, director, actors, plot, \
                        language, country, awards, poster, imdb_rating, type, \
                        box_office, created_at, updated_at";

/// Columns a paginated scan may sort by. This is the table's column set;
/// the pagination layer passes sort fields through verbatim, so the
/// schema-owning side is where unknown names get caught.
const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "title",
    "year",
    "runtime",
    "genre",
    "director",
    "actors",
    "plot",
    "language",
    "country",
    "awards",
    "poster",
    "imdb_rating",
    "type",
    "box_office",
    "created_at",
    "updated_at",
];

/// Resolve a requested sort field to a known column.
///
/// Unknown fields surface as [`sqlx::Error::ColumnNotFound`], the same
/// failure a hand-written query against a missing column would produce.
fn sort_column(field: &str) -> Result<&'static str, sqlx::Error> {
    SORTABLE_COLUMNS
        .iter()
        .find(|col| **col == field)
        .copied()
        .ok_or_else(|| sqlx::Error::ColumnNotFound(field.to_string()))
}

/// Catalog storage operations. Stateless; each method borrows the pool.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and return the stored row.
    ///
    /// Title uniqueness is enforced by `uq_movies_title`; a duplicate
    /// comes back as a database error with Postgres code 23505.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, year, runtime, genre, director, actors, plot, \
                                 language, country, awards, poster, imdb_rating, type, box_office)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {MOVIE_COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.year)
            .bind(&input.runtime)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(&input.actors)
            .bind(&input.plot)
            .bind(&input.language)
            .bind(&input.country)
            .bind(&input.awards)
            .bind(&input.poster)
            .bind(&input.imdb_rating)
            .bind(&input.r#type)
            .bind(&input.box_office)
            .fetch_one(pool)
            .await
    }

    /// Fetch one movie by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the whole catalog, newest insert first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY created_at DESC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Scan one page of movies plus the total row count for the table.
    ///
    /// The caller validates page and size; this method only resolves the
    /// sort column and runs the scan. Totals come from storage in the
    /// same call so the envelope never derives its own counts.
    pub async fn list_page(
        pool: &PgPool,
        request: &PageRequest,
    ) -> Result<(Vec<Movie>, i64), sqlx::Error> {
        let order_column = sort_column(&request.sort_field)?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await?;

        let query = format!(
            "SELECT {MOVIE_COLUMNS} FROM movies \
             ORDER BY {order_column} {} \
             LIMIT $1 OFFSET $2",
            request.direction.as_sql()
        );
        let rows = sqlx::query_as::<_, Movie>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(pool)
            .await?;

        Ok((rows, total))
    }

    /// Remove a movie by primary key, reporting whether a row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
