//! Row structs and request DTOs, one submodule per entity.
//!
//! The pattern inside each submodule: a `FromRow` + `Serialize` struct that
//! mirrors the table, a `Deserialize` DTO for inserts, an all-`Option` DTO
//! for patches, and a query-parameter struct where a listing takes filters.

pub mod exchange;
pub mod review;
pub mod skill;
pub mod stats;
pub mod user;
