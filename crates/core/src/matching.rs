//! Skill match classification.
//!
//! Two skills are match candidates when they share a title
//! (case-insensitive) and a category; the repository narrows the candidate
//! set with an indexed lookup. This module decides what kind of match a
//! candidate is from the teach/learn intents on each side.

use serde::Serialize;

/// Compatibility reported for every title-and-category match.
pub const COMPATIBILITY_HIGH: &str = "high";

/// What the owner of the candidate skill would be to me.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// The candidate can teach what I want to learn.
    Teacher,
    /// The candidate wants to learn what I can teach.
    Student,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Teacher => "teacher",
            MatchType::Student => "student",
        }
    }
}

/// Classify a candidate against my skill. Teacher matches win when both
/// directions would apply; intents that point the same way do not match.
pub fn classify(
    my_can_teach: bool,
    my_want_learn: bool,
    other_can_teach: bool,
    other_want_learn: bool,
) -> Option<MatchType> {
    if my_want_learn && other_can_teach {
        Some(MatchType::Teacher)
    } else if my_can_teach && other_want_learn {
        Some(MatchType::Student)
    } else {
        None
    }
}
