//! Airline entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailbook_core::types::{DbId, Timestamp};

/// An airline row from the `airlines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Airline {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new airline.
#[derive(Debug, Clone)]
pub struct CreateAirline {
    pub name: String,
}
