//! Query layer, one zero-sized repo per entity.
//!
//! Methods are plain async functions taking `&PgPool`; no repo holds state,
//! so handlers and tests call them directly on the pool they own.

pub mod exchange_repo;
pub mod review_repo;
pub mod skill_repo;
pub mod stats_repo;
pub mod user_repo;

pub use exchange_repo::ExchangeRepo;
pub use review_repo::ReviewRepo;
pub use skill_repo::SkillRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
