use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `"ok"` while the database answers and `"degraded"` when it
/// does not; the endpoint itself always returns 200 so load balancers can
/// tell a sick process from a dead one.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cinelist_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Liveness route, mounted outside the authenticated API surface.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
