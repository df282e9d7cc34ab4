//! Handlers for reviews, nested under `/exchanges/{id}/reviews`.
//!
//! A review is written by an authenticated participant of a completed
//! exchange about the other party. One review per reviewer per exchange.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::review as review_rules;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::Exchange;
use skillswap_db::models::review::{CreateReview, Review};
use skillswap_db::repositories::{ExchangeRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /exchanges/{id}/reviews
///
/// The reviewed party is derived, not chosen: the sender reviews the
/// receiver and vice versa.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(exchange_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    review_rules::validate_rating(input.rating)?;

    let exchange = find_exchange(&state, exchange_id).await?;
    let reviewed_id = review_rules::can_review(
        auth.user_id,
        exchange.sender_id,
        exchange.receiver_id,
        &exchange.status,
    )?;

    if ReviewRepo::find_by_exchange_and_reviewer(&state.pool, exchange_id, auth.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already reviewed this exchange".into(),
        )));
    }

    let review = ReviewRepo::create(
        &state.pool,
        exchange_id,
        auth.user_id,
        reviewed_id,
        input.rating,
        input.comment.as_deref(),
    )
    .await?;
    tracing::info!(
        review_id = review.id,
        exchange_id,
        reviewer_id = auth.user_id,
        "Review submitted",
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /exchanges/{id}/reviews
pub async fn list_by_exchange(
    State(state): State<AppState>,
    Path(exchange_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    find_exchange(&state, exchange_id).await?;
    let reviews = ReviewRepo::list_by_exchange(&state.pool, exchange_id).await?;
    Ok(Json(reviews))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn find_exchange(state: &AppState, id: DbId) -> AppResult<Exchange> {
    ExchangeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Exchange",
            id,
        }))
}
