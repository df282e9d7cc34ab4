//! Exchange lifecycle rules: status vocabulary, proposal field bounds, and
//! the authorization predicates gating who may mutate an exchange and when.
//!
//! Route handlers never make these decisions inline; they load the row and
//! delegate to the predicates here.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Every proposal starts here regardless of client input.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid exchange statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_ACCEPTED,
    STATUS_REJECTED,
    STATUS_CANCELLED,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const MESSAGE_MIN_CHARS: usize = 5;
pub const MESSAGE_MAX_CHARS: usize = 1000;
pub const HOURS_MIN: i32 = 1;
pub const HOURS_MAX: i32 = 100;
pub const HOURS_DEFAULT: i32 = 1;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a status value against the known set.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if !VALID_STATUSES.contains(&status) {
        return Err(CoreError::Validation(format!(
            "Invalid status '{}'. Valid statuses: {}",
            status,
            VALID_STATUSES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a proposal message (bounds in characters).
pub fn validate_message(message: &str) -> Result<(), CoreError> {
    let len = message.chars().count();
    if len < MESSAGE_MIN_CHARS || len > MESSAGE_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Message must be between {MESSAGE_MIN_CHARS} and {MESSAGE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate the proposed hour count.
pub fn validate_hours(hours: i32) -> Result<(), CoreError> {
    if !(HOURS_MIN..=HOURS_MAX).contains(&hours) {
        return Err(CoreError::Validation(format!(
            "Proposed hours must be between {HOURS_MIN} and {HOURS_MAX}"
        )));
    }
    Ok(())
}

/// A proposal needs two distinct parties.
pub fn validate_participants(sender_id: DbId, receiver_id: DbId) -> Result<(), CoreError> {
    if sender_id == receiver_id {
        return Err(CoreError::Validation(
            "An exchange cannot be proposed to yourself".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Authorization predicates
// ---------------------------------------------------------------------------

/// May `actor_id` move the exchange to `target_status`?
///
/// Identity is checked before state: a caller who is not the receiver gets
/// Forbidden whatever the current status. Statuses other than `pending` are
/// terminal, and a proposal never moves back to `pending`.
pub fn can_transition(
    actor_id: DbId,
    receiver_id: DbId,
    current_status: &str,
    target_status: &str,
) -> Result<(), CoreError> {
    if actor_id != receiver_id {
        return Err(CoreError::Forbidden(
            "Only the receiver may change the exchange status".into(),
        ));
    }
    if current_status != STATUS_PENDING {
        return Err(CoreError::Conflict(format!(
            "Exchange status '{current_status}' is final and cannot change"
        )));
    }
    if target_status == STATUS_PENDING {
        return Err(CoreError::Validation(
            "An exchange cannot be moved back to pending".into(),
        ));
    }
    Ok(())
}

/// May `actor_id` edit the proposal content or delete the proposal?
///
/// State is checked before identity: once an exchange has left `pending`,
/// every caller gets Conflict, the sender included.
pub fn can_edit(actor_id: DbId, sender_id: DbId, current_status: &str) -> Result<(), CoreError> {
    if current_status != STATUS_PENDING {
        return Err(CoreError::Conflict(
            "Only pending exchanges can be modified".into(),
        ));
    }
    if actor_id != sender_id {
        return Err(CoreError::Forbidden(
            "Only the sender may modify the exchange".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns the listing endpoint may sort by.
pub const SORTABLE_COLUMNS: &[&str] = &[
    "id",
    "sender_id",
    "receiver_id",
    "skill_id",
    "message",
    "hours_proposed",
    "status",
    "created_at",
    "updated_at",
];

/// Resolve a client-supplied sort field to a known column.
///
/// Unrecognized fields fall back to `created_at` rather than erroring, so a
/// typo degrades the ordering instead of the request. The returned value is
/// always a member of [`SORTABLE_COLUMNS`] and safe to splice into SQL.
pub fn sort_column(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|field| SORTABLE_COLUMNS.iter().find(|c| **c == field))
        .copied()
        .unwrap_or("created_at")
}

/// Resolve a client-supplied sort order. Only `asc` sorts ascending;
/// anything else, including absence, sorts descending.
pub fn sort_direction(requested: Option<&str>) -> &'static str {
    match requested {
        Some("asc") => "ASC",
        _ => "DESC",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
