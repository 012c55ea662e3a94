//! Domain rules for the tailbook record keeper.
//!
//! Everything in this crate is pure: error taxonomy, shared type aliases,
//! form-field validation and photo filename rules. Database and HTTP
//! concerns live in `tailbook-db` and `tailbook-api`.

pub mod error;
pub mod photos;
pub mod types;
pub mod validation;
