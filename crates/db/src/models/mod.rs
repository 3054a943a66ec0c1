//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` payload struct used for create and full-replace update

pub mod director;
pub mod genre;
pub mod movie;
