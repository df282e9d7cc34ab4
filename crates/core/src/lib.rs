//! Domain rules for the skill-exchange platform.
//!
//! This crate has no I/O and no internal dependencies: every rule here is a
//! pure function over primitives so the API layer, the repository layer, and
//! any future CLI tooling can share one source of truth.

pub mod error;
pub mod exchange;
pub mod matching;
pub mod pagination;
pub mod review;
pub mod skill;
pub mod types;
pub mod user;

pub use error::CoreError;
pub use types::{DbId, Timestamp};
