//! Request handlers for the HTTP surface.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the catalog service or the repositories in
//! `cinelist_db` and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod movies;
