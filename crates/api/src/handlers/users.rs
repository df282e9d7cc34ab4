//! Handlers for the `/users` resource.
//!
//! Registration and profile management. Credentials are owned by the
//! identity provider; this surface never sees or stores a password.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use skillswap_core::error::CoreError;
use skillswap_core::pagination::{clamp_limit, clamp_skip};
use skillswap_core::types::DbId;
use skillswap_core::user as user_rules;
use skillswap_db::models::review::Review;
use skillswap_db::models::skill::Skill;
use skillswap_db::models::user::{CreateUser, UpdateUser, User};
use skillswap_db::repositories::{ReviewRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /users
///
/// Registers a new user. Email and username must both be unique; the
/// email is checked first so a request that collides on both reports
/// the email conflict.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    user_rules::validate_username(&input.username)?;
    user_rules::validate_email(&input.email)?;
    validate_profile_fields(
        input.full_name.as_deref(),
        input.avatar_url.as_deref(),
        input.phone.as_deref(),
        input.location.as_deref(),
    )?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Email already registered".into()));
    }
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Username already taken".into()));
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<User>>> {
    let limit = clamp_limit(params.limit);
    let skip = clamp_skip(params.skip);
    let users = UserRepo::list(&state.pool, skip, limit).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// PUT /users/{id}
///
/// Partial update of profile fields. Username and email are fixed at
/// registration and absent from [`UpdateUser`].
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    validate_profile_fields(
        input.full_name.as_deref(),
        input.avatar_url.as_deref(),
        input.phone.as_deref(),
        input.location.as_deref(),
    )?;

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(user))
}

/// GET /users/{id}/skills
pub async fn list_skills(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Skill>>> {
    ensure_user_exists(&state, id).await?;
    let skills = UserRepo::list_skills(&state.pool, id).await?;
    Ok(Json(skills))
}

/// GET /users/{id}/reviews
///
/// Reviews received by the user, newest first.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    ensure_user_exists(&state, id).await?;
    let reviews = ReviewRepo::list_received(&state.pool, id).await?;
    Ok(Json(reviews))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn ensure_user_exists(state: &AppState, id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(())
}

fn validate_profile_fields(
    full_name: Option<&str>,
    avatar_url: Option<&str>,
    phone: Option<&str>,
    location: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(value) = full_name {
        user_rules::validate_full_name(value)?;
    }
    if let Some(value) = avatar_url {
        user_rules::validate_avatar_url(value)?;
    }
    if let Some(value) = phone {
        user_rules::validate_phone(value)?;
    }
    if let Some(value) = location {
        user_rules::validate_location(value)?;
    }
    Ok(())
}
