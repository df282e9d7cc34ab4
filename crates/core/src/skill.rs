//! Skill validation rules: category and level vocabularies, field length
//! bounds on trimmed input, and the teach/learn intent invariant.
//!
//! This module lives in `core` (zero internal deps) so the API and
//! repository layers share one source of truth.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_PROGRAMMING: &str = "programming";
pub const CATEGORY_MUSIC: &str = "music";
pub const CATEGORY_SPORTS: &str = "sports";
pub const CATEGORY_LANGUAGES: &str = "languages";
pub const CATEGORY_ART: &str = "art";
pub const CATEGORY_SCIENCE: &str = "science";
pub const CATEGORY_COOKING: &str = "cooking";
pub const CATEGORY_OTHER: &str = "other";

/// All valid skill categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_PROGRAMMING,
    CATEGORY_MUSIC,
    CATEGORY_SPORTS,
    CATEGORY_LANGUAGES,
    CATEGORY_ART,
    CATEGORY_SCIENCE,
    CATEGORY_COOKING,
    CATEGORY_OTHER,
];

// ---------------------------------------------------------------------------
// Level constants
// ---------------------------------------------------------------------------

pub const LEVEL_BEGINNER: &str = "beginner";
pub const LEVEL_INTERMEDIATE: &str = "intermediate";
pub const LEVEL_ADVANCED: &str = "advanced";
pub const LEVEL_EXPERT: &str = "expert";

/// All valid proficiency levels.
pub const VALID_LEVELS: &[&str] = &[
    LEVEL_BEGINNER,
    LEVEL_INTERMEDIATE,
    LEVEL_ADVANCED,
    LEVEL_EXPERT,
];

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a skill title. Callers trim the input before both validation
/// and storage; bounds are counted in characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len < TITLE_MIN_CHARS || len > TITLE_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate a skill description (trimmed by the caller, bounds in characters).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len < DESCRIPTION_MIN_CHARS || len > DESCRIPTION_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Description must be between {DESCRIPTION_MIN_CHARS} and {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate a category against the known set.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if !VALID_CATEGORIES.contains(&category) {
        return Err(CoreError::Validation(format!(
            "Invalid category '{}'. Valid categories: {}",
            category,
            VALID_CATEGORIES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a proficiency level against the known set.
pub fn validate_level(level: &str) -> Result<(), CoreError> {
    if !VALID_LEVELS.contains(&level) {
        return Err(CoreError::Validation(format!(
            "Invalid level '{}'. Valid levels: {}",
            level,
            VALID_LEVELS.join(", ")
        )));
    }
    Ok(())
}

/// A single skill record is either an offer to teach or a wish to learn,
/// never both. Applied to the merged state on updates as well.
pub fn validate_intent(can_teach: bool, want_learn: bool) -> Result<(), CoreError> {
    if can_teach && want_learn {
        return Err(CoreError::Validation(
            "A skill cannot have both can_teach and want_learn set".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
