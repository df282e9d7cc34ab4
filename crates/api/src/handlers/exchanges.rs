//! Handlers for the `/exchanges` resource.
//!
//! An exchange is a proposal from an authenticated sender to a receiver about
//! one skill. Who may do what is decided by the predicates in
//! `skillswap_core::exchange`; the repository then applies lifecycle
//! mutations compare-and-set on the pending status, and handlers re-read the
//! row when a mutation misses to tell a vanished exchange from a settled one.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::exchange as exchange_rules;
use skillswap_core::types::DbId;
use skillswap_db::models::exchange::{
    CreateExchange, Exchange, ExchangeDetail, ExchangeListFilter, UpdateExchange,
    UpdateExchangeStatus,
};
use skillswap_db::repositories::{ExchangeRepo, SkillRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /exchanges
///
/// Creates a proposal from the authenticated user. The status always starts
/// out pending regardless of the request body; unresolved hours default to
/// [`exchange_rules::HOURS_DEFAULT`].
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExchange>,
) -> AppResult<(StatusCode, Json<Exchange>)> {
    exchange_rules::validate_message(&input.message)?;
    let hours = input
        .hours_proposed
        .unwrap_or(exchange_rules::HOURS_DEFAULT);
    exchange_rules::validate_hours(hours)?;
    exchange_rules::validate_participants(auth.user_id, input.receiver_id)?;

    if UserRepo::find_by_id(&state.pool, input.receiver_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Receiver with id {} does not exist",
            input.receiver_id
        )));
    }
    if SkillRepo::find_by_id(&state.pool, input.skill_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "Skill with id {} does not exist",
            input.skill_id
        )));
    }

    let exchange = ExchangeRepo::create(&state.pool, auth.user_id, &input, hours).await?;
    tracing::info!(
        exchange_id = exchange.id,
        sender_id = auth.user_id,
        receiver_id = input.receiver_id,
        "Exchange proposed",
    );
    Ok((StatusCode::CREATED, Json(exchange)))
}

/// GET /exchanges
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ExchangeListFilter>,
) -> AppResult<Json<Vec<ExchangeDetail>>> {
    if let Some(ref status) = filter.status {
        exchange_rules::validate_status(status)?;
    }
    let exchanges = ExchangeRepo::list(&state.pool, &filter).await?;
    Ok(Json(exchanges))
}

/// GET /exchanges/user/{user_id}
///
/// Every exchange the user participates in, as sender or receiver.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<ExchangeDetail>>> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    let exchanges = ExchangeRepo::list_by_participant(&state.pool, user_id).await?;
    Ok(Json(exchanges))
}

/// GET /exchanges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExchangeDetail>> {
    let exchange = ExchangeRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(not_found(id))?;
    Ok(Json(exchange))
}

/// PUT /exchanges/{id}
///
/// Lets the sender adjust message or proposed hours while the exchange is
/// still pending. Anyone else, or any non-pending exchange, is rejected.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExchange>,
) -> AppResult<Json<Exchange>> {
    let existing = find_exchange(&state, id).await?;
    exchange_rules::can_edit(auth.user_id, existing.sender_id, &existing.status)?;

    if let Some(ref message) = input.message {
        exchange_rules::validate_message(message)?;
    }
    if let Some(hours) = input.hours_proposed {
        exchange_rules::validate_hours(hours)?;
    }

    match ExchangeRepo::update_content(&state.pool, id, &input).await? {
        Some(exchange) => Ok(Json(exchange)),
        // The pending check raced: the row is gone or already settled.
        None => Err(settled_or_gone(&state, id).await),
    }
}

/// PATCH /exchanges/{id}/status
///
/// Lets the receiver settle a pending exchange (accept, reject, cancel or
/// complete it). Settled exchanges never change again.
pub async fn update_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExchangeStatus>,
) -> AppResult<Json<Exchange>> {
    exchange_rules::validate_status(&input.status)?;

    let existing = find_exchange(&state, id).await?;
    exchange_rules::can_transition(
        auth.user_id,
        existing.receiver_id,
        &existing.status,
        &input.status,
    )?;

    match ExchangeRepo::update_status(&state.pool, id, &input.status).await? {
        Some(exchange) => {
            tracing::info!(
                exchange_id = exchange.id,
                user_id = auth.user_id,
                status = %exchange.status,
                "Exchange status changed",
            );
            Ok(Json(exchange))
        }
        None => Err(settled_or_gone(&state, id).await),
    }
}

/// DELETE /exchanges/{id}
///
/// Lets the sender withdraw a pending proposal.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_exchange(&state, id).await?;
    exchange_rules::can_edit(auth.user_id, existing.sender_id, &existing.status)?;

    if ExchangeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(settled_or_gone(&state, id).await)
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Exchange",
        id,
    })
}

async fn find_exchange(state: &AppState, id: DbId) -> AppResult<Exchange> {
    ExchangeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// A compare-and-set mutation missed. Re-read to report why: 404 when the
/// row is gone, 409 when another writer settled it first.
async fn settled_or_gone(state: &AppState, id: DbId) -> AppError {
    match ExchangeRepo::find_by_id(&state.pool, id).await {
        Ok(None) => not_found(id),
        Ok(Some(exchange)) => AppError::Core(CoreError::Conflict(format!(
            "Exchange {id} is already {status} and cannot change",
            status = exchange.status,
        ))),
        Err(err) => AppError::Database(err),
    }
}
