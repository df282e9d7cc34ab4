//! Row shapes for the aggregate statistics reports.

use serde::Serialize;
use sqlx::FromRow;

/// One row of the most-exchanged-skills report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopSkill {
    pub title: String,
    pub category: String,
    pub exchange_count: i64,
}

/// One row of the most-active-users report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveUser {
    pub username: String,
    pub full_name: Option<String>,
    pub total_exchanges: i64,
}

/// Raw counts behind the success-rate report.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ExchangeTotals {
    pub total: i64,
    pub completed: i64,
}
