//! Row structs and their request/response companions.
//!
//! Per table there is a `FromRow` struct mirroring the columns, an
//! insert payload, and where a row crosses the API boundary, a
//! `Serialize` shape trimmed for clients.

pub mod movie;
pub mod user;
