//! Queries against the `users` table.

use cinelist_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Every query selects the same columns so `User` always hydrates fully.
const USER_COLUMNS: &str = "id, email, password_hash, fullname, created_at, updated_at";

/// Account storage operations. Stateless; each method borrows the pool.
pub struct UserRepo;

impl UserRepo {
    /// Insert an account and return the stored row.
    ///
    /// Email uniqueness is enforced by `uq_users_email`; a duplicate
    /// comes back as a database error with Postgres code 23505.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, fullname)
             VALUES ($1, $2, $3)
             RETURNING {USER_COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.fullname)
            .fetch_one(pool)
            .await
    }

    /// Look up the account owning an email address, if any.
    ///
    /// Emails are compared exactly as stored; normalisation is the
    /// caller's concern.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Look up an account by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
