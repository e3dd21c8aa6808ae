//! Wire types for OMDb lookup responses.

use serde::Deserialize;

/// One movie's metadata as OMDb reports it.
///
/// Every field is optional: the provider omits or blanks fields it has
/// no data for, and which fields a catalog entry carries varies by
/// title. Field names follow OMDb's PascalCase wire casing.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieMetadata {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Type")]
    pub r#type: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
}

/// Envelope OMDb wraps every lookup in.
///
/// A miss is an HTTP 200 whose body is
/// `{"Response": "False", "Error": "Movie not found!"}`; a hit carries
/// `"Response": "True"` alongside the metadata fields.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub metadata: MovieMetadata,
}

impl LookupPayload {
    /// Whether the provider reported a hit for the looked-up title.
    pub fn is_found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}
