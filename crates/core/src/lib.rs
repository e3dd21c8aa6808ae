//! Shared domain types for the cinelist workspace.
//!
//! This crate has no internal dependencies so the db, omdb, and api
//! crates can all build on it.

pub mod error;
pub mod pagination;
pub mod types;
