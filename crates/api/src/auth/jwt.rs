//! Access-token issuing and verification.
//!
//! Tokens are stateless HS256 JWTs carrying a [`Claims`] payload. Nothing
//! is persisted server-side and there is no refresh flow; once a token
//! expires the client authenticates again through the login endpoint.

use chrono::{Duration, Utc};
use cinelist_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload signed into every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject, the user's database id.
    pub sub: DbId,
    /// Email of the authenticated user.
    pub email: String,
    /// Expiry as a UTC Unix timestamp.
    pub exp: i64,
    /// Issue time as a UTC Unix timestamp.
    pub iat: i64,
    /// Random token id (UUID v4), distinct per issued token.
    pub jti: String,
}

/// Default token lifetime when `JWT_ACCESS_EXPIRY_MINS` is unset.
const DEFAULT_TTL_MINS: i64 = 60;

/// Signing settings shared by token issue and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// How long an issued token stays valid.
    pub access_token_ttl: Duration,
}

impl JwtConfig {
    /// Read token settings from the environment.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS` | no       | `60`    |
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty, and when the expiry
    /// variable is not a number of minutes.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let ttl_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_TTL_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes");

        Self {
            secret,
            access_token_ttl: Duration::minutes(ttl_mins),
        }
    }
}

/// Issue a signed access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = Utc::now();
    let expires_at = issued_at + config.access_token_ttl;

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp: expires_at.timestamp(),
        iat: issued_at.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Check a token's signature and expiry, returning its [`Claims`].
///
/// `Validation::default()` pins the algorithm to HS256 and rejects
/// expired tokens (with the library's standard leeway).
pub fn verify_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(data.claims)
}
