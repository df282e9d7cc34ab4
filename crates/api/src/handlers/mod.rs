//! Request handlers, one submodule per resource.
//!
//! Handlers validate input with the rules in `skillswap_core`, delegate
//! persistence to the repositories in `skillswap_db`, and map failures via
//! [`AppError`](crate::error::AppError).

pub mod exchanges;
pub mod reviews;
pub mod skills;
pub mod stats;
pub mod users;
