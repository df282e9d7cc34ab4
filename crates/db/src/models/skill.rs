//! Skill entity model, DTOs and listing filter.

use serde::{Deserialize, Serialize};
use skillswap_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full skill row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub can_teach: bool,
    pub want_learn: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new skill.
#[derive(Debug, Deserialize)]
pub struct CreateSkill {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub can_teach: bool,
    #[serde(default)]
    pub want_learn: bool,
}

/// DTO for patching a skill. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSkill {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub can_teach: Option<bool>,
    pub want_learn: Option<bool>,
}

/// Query parameters accepted by the skill listing. All filters combine.
#[derive(Debug, Default, Deserialize)]
pub struct SkillListFilter {
    pub category: Option<String>,
    pub level: Option<String>,
    pub can_teach: Option<bool>,
    pub want_learn: Option<bool>,
    /// Case-insensitive substring over title and description.
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
