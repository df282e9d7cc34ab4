//! Repository for the `exchanges` table.
//!
//! Mutations that only make sense on a pending exchange are compare-and-set
//! on `status = 'pending'`, so two racing writers cannot both win; callers
//! distinguish "gone" from "no longer pending" by re-reading the row.

use skillswap_core::exchange::{sort_column, sort_direction, STATUS_PENDING};
use skillswap_core::pagination::{clamp_limit, clamp_skip};
use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::exchange::{
    CreateExchange, Exchange, ExchangeDetail, ExchangeListFilter, UpdateExchange,
};

/// SELECT list for bare exchange rows.
const COLUMNS: &str = "id, sender_id, receiver_id, skill_id, message, status, \
                        hours_proposed, created_at, updated_at";

/// Detail column list: the row plus the display names joined in.
const DETAIL_COLUMNS: &str =
    "e.id, e.sender_id, e.receiver_id, e.skill_id, e.message, e.status, \
     e.hours_proposed, e.created_at, e.updated_at, \
     su.username AS sender_username, ru.username AS receiver_username, \
     sk.title AS skill_title";

const DETAIL_JOINS: &str = "FROM exchanges e \
     JOIN users su ON su.id = e.sender_id \
     JOIN users ru ON ru.id = e.receiver_id \
     JOIN skills sk ON sk.id = e.skill_id";

/// CRUD, filtered listing and lifecycle mutations for exchanges.
pub struct ExchangeRepo;

impl ExchangeRepo {
    /// Insert a new proposal. The status always starts out pending; the
    /// caller supplies the resolved hour count.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        input: &CreateExchange,
        hours_proposed: i32,
    ) -> Result<Exchange, sqlx::Error> {
        let query = format!(
            "INSERT INTO exchanges (sender_id, receiver_id, skill_id, message, status, hours_proposed)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exchange>(&query)
            .bind(sender_id)
            .bind(input.receiver_id)
            .bind(input.skill_id)
            .bind(&input.message)
            .bind(STATUS_PENDING)
            .bind(hours_proposed)
            .fetch_one(pool)
            .await
    }

    /// Look up a bare exchange row (no joins; used for rule checks).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exchange>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exchanges WHERE id = $1");
        sqlx::query_as::<_, Exchange>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an exchange with participant usernames and skill title joined in.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ExchangeDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE e.id = $1");
        sqlx::query_as::<_, ExchangeDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List exchanges matching the filter, with details joined in.
    ///
    /// The sort column and direction come from the whitelist in
    /// `skillswap_core::exchange`; ties break by id in the same direction so
    /// pagination stays stable.
    pub async fn list(
        pool: &PgPool,
        filter: &ExchangeListFilter,
    ) -> Result<Vec<ExchangeDetail>, sqlx::Error> {
        let limit = clamp_limit(filter.limit);
        let skip = clamp_skip(filter.skip);
        let order_col = sort_column(filter.sort_by.as_deref());
        let order_dir = sort_direction(filter.sort_order.as_deref());

        // Assemble the WHERE clause from whichever filters are set.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("e.status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.sender_id.is_some() {
            conditions.push(format!("e.sender_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.receiver_id.is_some() {
            conditions.push(format!("e.receiver_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.skill_id.is_some() {
            conditions.push(format!("e.skill_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.from_date.is_some() {
            conditions.push(format!("e.created_at >= ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.to_date.is_some() {
            conditions.push(format!("e.created_at <= ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             {where_clause} \
             ORDER BY e.{order_col} {order_dir}, e.id {order_dir} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, ExchangeDetail>(&query);

        // Binds must follow the order the clauses were pushed.
        if let Some(ref status) = filter.status {
            q = q.bind(status);
        }
        if let Some(sender_id) = filter.sender_id {
            q = q.bind(sender_id);
        }
        if let Some(receiver_id) = filter.receiver_id {
            q = q.bind(receiver_id);
        }
        if let Some(skill_id) = filter.skill_id {
            q = q.bind(skill_id);
        }
        if let Some(from_date) = filter.from_date {
            q = q.bind(from_date);
        }
        if let Some(to_date) = filter.to_date {
            q = q.bind(to_date);
        }

        q = q.bind(limit).bind(skip);
        q.fetch_all(pool).await
    }

    /// List every exchange a user participates in, newest first.
    pub async fn list_by_participant(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ExchangeDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS}
             WHERE e.sender_id = $1 OR e.receiver_id = $1
             ORDER BY e.created_at DESC, e.id DESC"
        );
        sqlx::query_as::<_, ExchangeDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the non-`None` fields of `input` to a still-pending proposal.
    ///
    /// Returns `None` when the row is absent or no longer pending.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExchange,
    ) -> Result<Option<Exchange>, sqlx::Error> {
        let query = format!(
            "UPDATE exchanges SET
                message = COALESCE($3, message),
                hours_proposed = COALESCE($4, hours_proposed)
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exchange>(&query)
            .bind(id)
            .bind(STATUS_PENDING)
            .bind(&input.message)
            .bind(input.hours_proposed)
            .fetch_optional(pool)
            .await
    }

    /// Move a pending exchange to its final status.
    ///
    /// Returns `None` when the row is absent or no longer pending.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Exchange>, sqlx::Error> {
        let query = format!(
            "UPDATE exchanges SET status = $3
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exchange>(&query)
            .bind(id)
            .bind(STATUS_PENDING)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pending exchange. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exchanges WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(STATUS_PENDING)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
