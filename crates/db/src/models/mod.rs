//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for inserts and updates

pub mod analytics;
pub mod category;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod time_session;
pub mod user;
