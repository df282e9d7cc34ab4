//! Exchange entity model, DTOs and listing filter.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full exchange row from the `exchanges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exchange {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub skill_id: DbId,
    pub message: String,
    pub status: String,
    pub hours_proposed: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Exchange row joined with the display names read endpoints return.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExchangeDetail {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub skill_id: DbId,
    pub message: String,
    pub status: String,
    pub hours_proposed: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub sender_username: String,
    pub receiver_username: String,
    pub skill_title: String,
}

/// DTO for proposing an exchange.
///
/// The sender comes from the caller's credentials and the status always
/// starts out pending; neither is accepted from the body (unknown fields
/// are ignored on deserialization).
#[derive(Debug, Deserialize)]
pub struct CreateExchange {
    pub receiver_id: DbId,
    pub skill_id: DbId,
    pub message: String,
    pub hours_proposed: Option<i32>,
}

/// DTO for the sender's content edits while the exchange is pending.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExchange {
    pub message: Option<String>,
    pub hours_proposed: Option<i32>,
}

/// DTO for status transitions by the receiver.
#[derive(Debug, Deserialize)]
pub struct UpdateExchangeStatus {
    pub status: String,
}

/// Query parameters accepted by the exchange listing. All filters combine;
/// date bounds are inclusive on `created_at`.
#[derive(Debug, Default, Deserialize)]
pub struct ExchangeListFilter {
    pub status: Option<String>,
    pub sender_id: Option<DbId>,
    pub receiver_id: Option<DbId>,
    pub skill_id: Option<DbId>,
    pub from_date: Option<Timestamp>,
    pub to_date: Option<Timestamp>,
    /// Column to sort by; unknown values fall back to `created_at`.
    pub sort_by: Option<String>,
    /// `asc` for ascending, anything else descending.
    pub sort_order: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
