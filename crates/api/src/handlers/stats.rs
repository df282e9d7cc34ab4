//! Handlers for the `/api/stats` reports.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use skillswap_db::models::stats::{ActiveUser, TopSkill};
use skillswap_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/stats/top-skills`.
#[derive(Debug, Serialize)]
pub struct TopSkillsReport {
    pub top_skills: Vec<TopSkill>,
}

/// Response body for `GET /api/stats/active-users`.
#[derive(Debug, Serialize)]
pub struct ActiveUsersReport {
    pub active_users: Vec<ActiveUser>,
}

/// Response body for `GET /api/stats/exchange-success-rate`.
#[derive(Debug, Serialize)]
pub struct SuccessRateReport {
    pub total_exchanges: i64,
    pub completed_exchanges: i64,
    /// Completed share of all exchanges, in percent, rounded to 2 decimals.
    pub success_rate: f64,
    /// The same rate preformatted for display, e.g. `"66.67%"`.
    pub success_percentage: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/stats/top-skills
///
/// The ten skills referenced by the most exchanges.
pub async fn top_skills(State(state): State<AppState>) -> AppResult<Json<TopSkillsReport>> {
    let top_skills = StatsRepo::top_skills(&state.pool).await?;
    Ok(Json(TopSkillsReport { top_skills }))
}

/// GET /api/stats/active-users
///
/// The ten users participating in the most exchanges, either side counted.
pub async fn active_users(State(state): State<AppState>) -> AppResult<Json<ActiveUsersReport>> {
    let active_users = StatsRepo::active_users(&state.pool).await?;
    Ok(Json(ActiveUsersReport { active_users }))
}

/// GET /api/stats/exchange-success-rate
///
/// Share of exchanges that reached the completed status. With no exchanges
/// at all the report is zeros, not an error.
pub async fn exchange_success_rate(
    State(state): State<AppState>,
) -> AppResult<Json<SuccessRateReport>> {
    let totals = StatsRepo::exchange_totals(&state.pool).await?;

    let success_rate = if totals.total == 0 {
        0.0
    } else {
        let rate = totals.completed as f64 / totals.total as f64 * 100.0;
        (rate * 100.0).round() / 100.0
    };

    Ok(Json(SuccessRateReport {
        total_exchanges: totals.total,
        completed_exchanges: totals.completed,
        success_rate,
        success_percentage: format!("{success_rate:.2}%"),
    }))
}
