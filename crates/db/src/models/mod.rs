//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Records are append-only, so there are no update DTOs.

pub mod aircraft;
pub mod airline;
pub mod registration;
