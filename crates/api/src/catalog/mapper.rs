//! Pure field mappings for catalog shapes.
//!
//! No I/O and no business logic lives here. Values pass through
//! untouched: no unit conversion, no trimming, and no substitution of
//! placeholder values like `"N/A"`.

use cinelist_core::error::CoreError;
use cinelist_db::models::movie::{CreateMovie, Movie, MovieView};
use cinelist_omdb::MovieMetadata;

/// Convert a provider metadata record into a storable movie record.
///
/// Field correspondence is the identity. The provider marks fields it
/// has no data for by omitting them; for a field the catalog requires,
/// that absence is a validation failure raised here, before any storage
/// call. Fields the catalog stores as nullable stay optional.
pub fn metadata_to_record(metadata: MovieMetadata) -> Result<CreateMovie, CoreError> {
    Ok(CreateMovie {
        title: required(metadata.title, "Title")?,
        year: required(metadata.year, "Year")?,
        runtime: required(metadata.runtime, "Runtime")?,
        genre: required(metadata.genre, "Genre")?,
        director: required(metadata.director, "Director")?,
        actors: required(metadata.actors, "Actors")?,
        plot: required(metadata.plot, "Plot")?,
        language: required(metadata.language, "Language")?,
        country: required(metadata.country, "Country")?,
        awards: metadata.awards,
        poster: required(metadata.poster, "Poster")?,
        imdb_rating: metadata.imdb_rating,
        r#type: required(metadata.r#type, "Type")?,
        box_office: metadata.box_office,
    })
}

/// Project a stored movie down to its public listing shape.
///
/// Drops the internal id and timestamps; every domain field is copied
/// verbatim.
pub fn record_to_view(movie: Movie) -> MovieView {
    MovieView {
        title: movie.title,
        year: movie.year,
        runtime: movie.runtime,
        genre: movie.genre,
        director: movie.director,
        actors: movie.actors,
        plot: movie.plot,
        language: movie.language,
        country: movie.country,
        awards: movie.awards,
        poster: movie.poster,
        imdb_rating: movie.imdb_rating,
        r#type: movie.r#type,
        box_office: movie.box_office,
    }
}

/// Unwrap a required provider field, naming it on absence.
fn required(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    value.ok_or_else(|| {
        CoreError::Validation(format!("Provider record is missing required field '{field}'"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn full_metadata() -> MovieMetadata {
        MovieMetadata {
            title: Some("Inception".to_string()),
            year: Some("2010".to_string()),
            runtime: Some("148 min".to_string()),
            genre: Some("Action, Adventure, Sci-Fi".to_string()),
            director: Some("Christopher Nolan".to_string()),
            actors: Some("Leonardo DiCaprio, Joseph Gordon-Levitt".to_string()),
            plot: Some("A thief infiltrates dreams.".to_string()),
            language: Some("English, Japanese, French".to_string()),
            country: Some("United States, United Kingdom".to_string()),
            awards: Some("Won 4 Oscars.".to_string()),
            poster: Some("https://example.com/inception.jpg".to_string()),
            imdb_rating: Some("8.8".to_string()),
            r#type: Some("movie".to_string()),
            box_office: Some("$292,587,330".to_string()),
        }
    }

    fn stored_movie() -> Movie {
        Movie {
            id: 7,
            title: "Inception".to_string(),
            year: "2010".to_string(),
            runtime: "148 min".to_string(),
            genre: "Action, Adventure, Sci-Fi".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: "Leonardo DiCaprio, Joseph Gordon-Levitt".to_string(),
            plot: "A thief infiltrates dreams.".to_string(),
            language: "English, Japanese, French".to_string(),
            country: "United States, United Kingdom".to_string(),
            awards: Some("Won 4 Oscars.".to_string()),
            poster: "https://example.com/inception.jpg".to_string(),
            imdb_rating: Some("8.8".to_string()),
            r#type: "movie".to_string(),
            box_office: Some("$292,587,330".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // -- metadata_to_record --------------------------------------------------

    #[test]
    fn maps_every_field_verbatim() {
        let record = metadata_to_record(full_metadata()).unwrap();
        assert_eq!(record.title, "Inception");
        assert_eq!(record.year, "2010");
        assert_eq!(record.runtime, "148 min");
        assert_eq!(record.genre, "Action, Adventure, Sci-Fi");
        assert_eq!(record.director, "Christopher Nolan");
        assert_eq!(record.actors, "Leonardo DiCaprio, Joseph Gordon-Levitt");
        assert_eq!(record.plot, "A thief infiltrates dreams.");
        assert_eq!(record.language, "English, Japanese, French");
        assert_eq!(record.country, "United States, United Kingdom");
        assert_eq!(record.awards.as_deref(), Some("Won 4 Oscars."));
        assert_eq!(record.poster, "https://example.com/inception.jpg");
        assert_eq!(record.imdb_rating.as_deref(), Some("8.8"));
        assert_eq!(record.r#type, "movie");
        assert_eq!(record.box_office.as_deref(), Some("$292,587,330"));
    }

    #[test]
    fn placeholder_values_pass_through_untouched() {
        let mut metadata = full_metadata();
        metadata.box_office = Some("N/A".to_string());
        let record = metadata_to_record(metadata).unwrap();
        assert_eq!(record.box_office.as_deref(), Some("N/A"));
    }

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let mut metadata = full_metadata();
        metadata.title = None;

        let err = metadata_to_record(metadata).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("'Title'"), "error should name the field, got: {msg}");
        });
    }

    #[test]
    fn missing_optional_fields_stay_optional() {
        let mut metadata = full_metadata();
        metadata.awards = None;
        metadata.imdb_rating = None;
        metadata.box_office = None;

        let record = metadata_to_record(metadata).unwrap();
        assert_eq!(record.awards, None);
        assert_eq!(record.imdb_rating, None);
        assert_eq!(record.box_office, None);
    }

    // -- record_to_view ------------------------------------------------------

    #[test]
    fn view_keeps_domain_fields_and_drops_bookkeeping() {
        let view = record_to_view(stored_movie());
        assert_eq!(view.title, "Inception");
        assert_eq!(view.imdb_rating.as_deref(), Some("8.8"));
        assert_eq!(view.box_office.as_deref(), Some("$292,587,330"));

        // The serialized view must carry no id and no timestamps.
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
        assert!(json.get("updatedAt").is_none());
        assert_eq!(json["imdbRating"], "8.8");
    }
}
