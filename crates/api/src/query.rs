//! Shared query-parameter types.

use serde::Deserialize;

/// Plain skip/limit pagination, used by listings without their own filter
/// struct. Values are clamped by `skillswap_core::pagination`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
