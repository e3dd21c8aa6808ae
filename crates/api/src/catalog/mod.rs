//! Catalog orchestration: provider lookups, field mapping, and storage.
//!
//! - [`mapper`] -- pure conversions between provider metadata, storage
//!   records, and public views.
//! - [`CatalogService`] -- the operations behind the `/movie` resource.

pub mod mapper;
pub mod service;

pub use service::CatalogService;
