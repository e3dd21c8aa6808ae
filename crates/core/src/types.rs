//! Aliases shared by every crate in the workspace.

/// Primary-key type; matches the `BIGSERIAL` columns in Postgres.
pub type DbId = i64;

/// Instants are carried in UTC end to end.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
