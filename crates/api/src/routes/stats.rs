//! Route definitions for the `/api/stats` reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/api/stats`.
///
/// ```text
/// GET /top-skills             -> top_skills
/// GET /active-users           -> active_users
/// GET /exchange-success-rate  -> exchange_success_rate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top-skills", get(stats::top_skills))
        .route("/active-users", get(stats::active_users))
        .route("/exchange-success-rate", get(stats::exchange_success_rate))
}
