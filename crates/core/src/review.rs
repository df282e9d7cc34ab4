//! Review rules: rating bounds and the predicate deciding who may review
//! a given exchange.

use crate::error::CoreError;
use crate::exchange::STATUS_COMPLETED;
use crate::types::DbId;

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Validate a review rating.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {RATING_MIN} and {RATING_MAX}"
        )));
    }
    Ok(())
}

/// May `reviewer_id` review this exchange? On success returns the id of the
/// party being reviewed, which is always the opposite participant.
///
/// Identity is checked before state, mirroring status transitions: a
/// non-participant gets Forbidden whatever the status, a participant of an
/// unfinished exchange gets Conflict.
pub fn can_review(
    reviewer_id: DbId,
    sender_id: DbId,
    receiver_id: DbId,
    status: &str,
) -> Result<DbId, CoreError> {
    let reviewed_id = if reviewer_id == sender_id {
        receiver_id
    } else if reviewer_id == receiver_id {
        sender_id
    } else {
        return Err(CoreError::Forbidden(
            "Only exchange participants may leave a review".into(),
        ));
    };
    if status != STATUS_COMPLETED {
        return Err(CoreError::Conflict(
            "Only completed exchanges can be reviewed".into(),
        ));
    }
    Ok(reviewed_id)
}
