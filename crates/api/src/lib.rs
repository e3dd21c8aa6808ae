//! Library surface of the cinelist API server.
//!
//! The binary entrypoint and the integration tests assemble the same
//! application from these modules, so everything router-related lives
//! here rather than in `main.rs`.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
