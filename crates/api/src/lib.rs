//! SkillSwap REST API.
//!
//! The building blocks are public so the integration tests can drive the
//! same router the binary serves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
