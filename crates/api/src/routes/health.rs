use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database probe fails.
    pub status: &'static str,
    /// Version baked in at compile time.
    pub version: &'static str,
    /// Whether the database answered the probe query.
    pub db_healthy: bool,
}

/// Liveness and database probe. Always 200; a dead database degrades the
/// payload instead of failing the request.
async fn probe(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = skillswap_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Routes mounted at the root, outside the resource tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(probe))
}
