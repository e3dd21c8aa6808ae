//! Extractors that run before handler bodies.
//!
//! [`auth::AuthUser`] proves a request carries a valid bearer token.

pub mod auth;
