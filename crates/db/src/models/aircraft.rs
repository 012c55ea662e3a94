//! Aircraft entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailbook_core::types::{DbId, Timestamp};

/// An aircraft row from the `aircraft` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aircraft {
    pub id: DbId,
    pub airline_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new aircraft under an existing airline.
#[derive(Debug, Clone)]
pub struct CreateAircraft {
    pub airline_id: DbId,
    pub name: String,
}

/// An aircraft joined with its airline's name, for select boxes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AircraftChoice {
    pub id: DbId,
    pub name: String,
    pub airline_name: String,
}
