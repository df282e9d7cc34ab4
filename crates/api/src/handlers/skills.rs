//! Handlers for the `/skills` resource.
//!
//! Skill creation requires authentication via [`AuthUser`]; the new skill is
//! associated with the caller. The `/skills/{id}/matches` endpoint reports
//! counterpart skills for an exchange (same title and category, opposite
//! teach/learn intent).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use skillswap_core::error::CoreError;
use skillswap_core::matching::{self, MatchType};
use skillswap_core::skill as skill_rules;
use skillswap_core::types::DbId;
use skillswap_db::models::skill::{CreateSkill, Skill, SkillListFilter, UpdateSkill};
use skillswap_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One entry in the match report for a skill.
#[derive(Debug, Serialize)]
pub struct SkillMatch {
    /// What the counterpart is to the caller: a `teacher` or a `student`.
    pub match_type: MatchType,
    pub skill: Skill,
    pub compatibility: &'static str,
}

/// Response body for `GET /skills/{id}/matches`.
#[derive(Debug, Serialize)]
pub struct SkillMatchReport {
    pub skill_id: DbId,
    /// Title of the skill the report was requested for.
    pub my_skill: String,
    pub matches_count: usize,
    pub matches: Vec<SkillMatch>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /skills
///
/// Creates a skill owned by the authenticated user. Title and description
/// are trimmed before validation.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    input.title = input.title.trim().to_string();
    input.description = input.description.trim().to_string();

    skill_rules::validate_title(&input.title)?;
    skill_rules::validate_description(&input.description)?;
    skill_rules::validate_category(&input.category)?;
    skill_rules::validate_level(&input.level)?;
    skill_rules::validate_intent(input.can_teach, input.want_learn)?;

    let skill = SkillRepo::create_for_user(&state.pool, auth.user_id, &input).await?;
    tracing::info!(skill_id = skill.id, user_id = auth.user_id, "Skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /skills
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<SkillListFilter>,
) -> AppResult<Json<Vec<Skill>>> {
    if let Some(ref category) = filter.category {
        skill_rules::validate_category(category)?;
    }
    if let Some(ref level) = filter.level {
        skill_rules::validate_level(level)?;
    }
    let skills = SkillRepo::list(&state.pool, &filter).await?;
    Ok(Json(skills))
}

/// GET /skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Skill>> {
    let skill = find_skill(&state, id).await?;
    Ok(Json(skill))
}

/// PUT /skills/{id}
///
/// Partial update. The teach/learn invariant is checked against the merged
/// record, so a patch cannot leave a skill marked as both.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    let existing = find_skill(&state, id).await?;

    if let Some(ref mut title) = input.title {
        *title = title.trim().to_string();
        skill_rules::validate_title(title)?;
    }
    if let Some(ref mut description) = input.description {
        *description = description.trim().to_string();
        skill_rules::validate_description(description)?;
    }
    if let Some(ref category) = input.category {
        skill_rules::validate_category(category)?;
    }
    if let Some(ref level) = input.level {
        skill_rules::validate_level(level)?;
    }

    let can_teach = input.can_teach.unwrap_or(existing.can_teach);
    let want_learn = input.want_learn.unwrap_or(existing.want_learn);
    skill_rules::validate_intent(can_teach, want_learn)?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;
    Ok(Json(skill))
}

/// DELETE /skills/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
    }
}

/// GET /skills/{id}/matches
///
/// Reports skills that pair with this one for an exchange. Candidates share
/// the title (case-insensitive) and category; classification follows
/// [`matching::classify`].
pub async fn find_matches(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SkillMatchReport>> {
    let skill = find_skill(&state, id).await?;

    let candidates =
        SkillRepo::find_match_candidates(&state.pool, &skill.title, &skill.category, skill.id)
            .await?;

    let matches: Vec<SkillMatch> = candidates
        .into_iter()
        .filter_map(|candidate| {
            matching::classify(
                skill.can_teach,
                skill.want_learn,
                candidate.can_teach,
                candidate.want_learn,
            )
            .map(|match_type| SkillMatch {
                match_type,
                skill: candidate,
                compatibility: matching::COMPATIBILITY_HIGH,
            })
        })
        .collect();

    Ok(Json(SkillMatchReport {
        skill_id: skill.id,
        my_skill: skill.title,
        matches_count: matches.len(),
        matches,
    }))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn find_skill(state: &AppState, id: DbId) -> AppResult<Skill> {
    SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
}
