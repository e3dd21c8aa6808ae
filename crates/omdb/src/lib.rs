//! Minimal client for the OMDb HTTP API.
//!
//! One operation: look a movie up by title. The provider signals a miss
//! with an HTTP 200 whose body says so; this crate turns that into a
//! typed [`OmdbError::NotFound`] so callers never inspect the envelope
//! themselves.

mod client;
mod error;
pub mod models;

pub use client::{OmdbClient, OmdbConfig};
pub use error::OmdbError;
pub use models::MovieMetadata;

pub type Result<T> = std::result::Result<T, OmdbError>;
