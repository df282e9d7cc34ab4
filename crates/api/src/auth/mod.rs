//! Token validation for the identity layer.
//!
//! Token issuance lives in the external identity service; this side only
//! validates what arrives in the `Authorization` header.

pub mod jwt;
