//! Aggregate statistics queries over the exchange history.

use skillswap_core::exchange::STATUS_COMPLETED;
use sqlx::PgPool;

use crate::models::stats::{ActiveUser, ExchangeTotals, TopSkill};

/// Row cap for the top-N reports.
const TOP_LIMIT: i64 = 10;

/// Read-only statistics reports.
pub struct StatsRepo;

impl StatsRepo {
    /// Skills ranked by how many exchanges reference them.
    ///
    /// Grouping includes the skill id so two skills sharing a title stay
    /// separate rows; ties break by id so the ranking is deterministic.
    pub async fn top_skills(pool: &PgPool) -> Result<Vec<TopSkill>, sqlx::Error> {
        sqlx::query_as::<_, TopSkill>(
            "SELECT s.title, s.category, COUNT(e.id)::BIGINT AS exchange_count
             FROM skills s
             JOIN exchanges e ON e.skill_id = s.id
             GROUP BY s.id, s.title, s.category
             ORDER BY exchange_count DESC, s.id ASC
             LIMIT $1",
        )
        .bind(TOP_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Users ranked by how many exchanges they participate in, either side.
    pub async fn active_users(pool: &PgPool) -> Result<Vec<ActiveUser>, sqlx::Error> {
        sqlx::query_as::<_, ActiveUser>(
            "SELECT u.username, u.full_name, COUNT(e.id)::BIGINT AS total_exchanges
             FROM users u
             JOIN exchanges e ON u.id = e.sender_id OR u.id = e.receiver_id
             GROUP BY u.id, u.username, u.full_name
             ORDER BY total_exchanges DESC, u.id ASC
             LIMIT $1",
        )
        .bind(TOP_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Overall and completed exchange counts for the success-rate report.
    pub async fn exchange_totals(pool: &PgPool) -> Result<ExchangeTotals, sqlx::Error> {
        sqlx::query_as::<_, ExchangeTotals>(
            "SELECT COUNT(*)::BIGINT AS total,
                    (COUNT(*) FILTER (WHERE status = $1))::BIGINT AS completed
             FROM exchanges",
        )
        .bind(STATUS_COMPLETED)
        .fetch_one(pool)
        .await
    }
}
