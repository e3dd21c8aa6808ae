//! Query modules, one per table.
//!
//! Repositories hold no state of their own; every method is an
//! associated async fn taking the pool as its first argument.

pub mod movie_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
