//! Review entity model and DTO.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full review row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub exchange_id: DbId,
    pub reviewer_id: DbId,
    pub reviewed_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for leaving a review. The exchange comes from the path, the reviewer
/// from the caller's credentials, and the reviewed party is derived as the
/// opposite participant.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub rating: i32,
    pub comment: Option<String>,
}
