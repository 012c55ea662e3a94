//! Registration entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use tailbook_core::types::{DbId, Timestamp};

/// A registration row from the `registrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Registration {
    pub id: DbId,
    pub aircraft_id: DbId,
    pub registration_code: String,
    /// Name of a file in the upload directory.
    pub photo_filename: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new registration under an existing aircraft.
#[derive(Debug, Clone)]
pub struct CreateRegistration {
    pub aircraft_id: DbId,
    pub registration_code: String,
    pub photo_filename: Option<String>,
    pub notes: Option<String>,
}
