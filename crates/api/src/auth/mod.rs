//! Credential handling.
//!
//! [`password`] covers Argon2id hashing, [`jwt`] covers issuing and
//! verifying the HS256 access tokens.

pub mod jwt;
pub mod password;
