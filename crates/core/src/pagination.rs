//! Pagination clamps shared by every listing endpoint.

/// Default page size when the client does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Hard ceiling on page size.
pub const MAX_PAGE_LIMIT: i64 = 200;

/// Force a requested page size into `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1).min(MAX_PAGE_LIMIT)
}

/// Clamp a user-provided skip to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}
