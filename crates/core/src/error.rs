use crate::types::DbId;

/// Error taxonomy shared by every layer above this crate.
///
/// Variants say what went wrong; the HTTP surface owns the mapping to
/// status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity a request names does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input broke a field or vocabulary rule.
    #[error("validation: {0}")]
    Validation(String),

    /// The request is well-formed but the current state refuses it.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but may not do this.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A bug or an unexpected condition.
    #[error("internal: {0}")]
    Internal(String),
}
