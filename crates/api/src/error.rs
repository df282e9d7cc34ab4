//! HTTP error type and its JSON rendering.
//!
//! Every handler returns [`AppResult`]; the [`IntoResponse`] impl turns
//! failures into `{"error": ..., "code": ...}` bodies with the matching
//! status code. Database errors are classified so constraint violations
//! surface as client errors instead of 500s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use skillswap_core::error::CoreError;

/// Error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain rule violation reported by `skillswap_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Failure from the database layer.
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    /// Request is malformed in a way the domain layer never sees.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Anything that should page someone.
    #[error("internal: {0}")]
    InternalError(String),
}

/// Alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => classify_database_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_parts()
            }
        }
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_parts()
        }
    }
}

/// Map a sqlx error to response parts.
///
/// `RowNotFound` becomes 404. Unique and foreign-key violations become 409,
/// with known constraint names mapped to the message the handler pre-checks
/// use. Everything else is logged and sanitized to a 500.
fn classify_database_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (StatusCode::CONFLICT, "CONFLICT", duplicate_message(constraint))
            }
            Some("23503") => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Resource is still referenced by other records".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal_parts()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal_parts()
        }
    }
}

fn duplicate_message(constraint: &str) -> String {
    match constraint {
        "uq_users_email" => "Email already registered".to_string(),
        "uq_users_username" => "Username already taken".to_string(),
        "uq_reviews_exchange_reviewer" => "You have already reviewed this exchange".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

fn internal_parts() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
