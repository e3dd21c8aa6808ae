use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::config::ServerConfig;

/// Everything a handler can reach through `State<AppState>`.
///
/// Axum clones this once per request; each field is an `Arc` or a cheap
/// handle, so the clone is pointer work.
#[derive(Clone)]
pub struct AppState {
    /// Postgres pool, shared with the repositories.
    pub pool: cinelist_db::DbPool,
    /// Immutable settings read once at startup.
    pub config: Arc<ServerConfig>,
    /// Provider lookups and catalog storage behind one facade.
    pub catalog: CatalogService,
}
