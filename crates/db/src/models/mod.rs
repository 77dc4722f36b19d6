//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` form DTO used for both inserts and full-overwrite edits

pub mod category;
pub mod game;
pub mod movie;
pub mod series;
pub mod session;
pub mod trilogy;
pub mod user;
