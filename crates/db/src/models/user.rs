//! Account rows and their insert/response shapes.

use cinelist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A complete `users` row, password hash included.
///
/// This shape must never reach a client; handlers convert to
/// [`UserResponse`] before serializing.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub fullname: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The account fields a client is allowed to see.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub fullname: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            fullname: user.fullname,
            created_at: user.created_at,
        }
    }
}

/// Insert payload. The hash arrives pre-computed; plaintext passwords
/// never reach this crate.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub fullname: String,
}
