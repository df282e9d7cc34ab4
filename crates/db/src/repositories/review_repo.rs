//! Repository for the `reviews` table.

use skillswap_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::Review;

/// SELECT list reused by every query below. No updated_at: reviews are
/// write-once.
const COLUMNS: &str = "id, exchange_id, reviewer_id, reviewed_id, rating, comment, created_at";

/// Creation and lookups for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review and return the stored row.
    pub async fn create(
        pool: &PgPool,
        exchange_id: DbId,
        reviewer_id: DbId,
        reviewed_id: DbId,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (exchange_id, reviewer_id, reviewed_id, rating, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(exchange_id)
            .bind(reviewer_id)
            .bind(reviewed_id)
            .bind(rating)
            .bind(comment)
            .fetch_one(pool)
            .await
    }

    /// Find the review a user left on an exchange, if any.
    pub async fn find_by_exchange_and_reviewer(
        pool: &PgPool,
        exchange_id: DbId,
        reviewer_id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews WHERE exchange_id = $1 AND reviewer_id = $2");
        sqlx::query_as::<_, Review>(&query)
            .bind(exchange_id)
            .bind(reviewer_id)
            .fetch_optional(pool)
            .await
    }

    /// List the reviews on an exchange, oldest first.
    pub async fn list_by_exchange(
        pool: &PgPool,
        exchange_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE exchange_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(exchange_id)
            .fetch_all(pool)
            .await
    }

    /// List the reviews a user has received, newest first.
    pub async fn list_received(pool: &PgPool, user_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE reviewed_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
