//! Repository for the `registrations` table.

use sqlx::SqlitePool;
use tailbook_core::types::DbId;

use crate::models::registration::{CreateRegistration, Registration};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, aircraft_id, registration_code, photo_filename, notes, created_at";

/// Provides create and read operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Insert a new registration, returning the created row.
    ///
    /// Fails with a unique violation if the code is taken and a foreign key
    /// violation if `aircraft_id` does not exist.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateRegistration,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO registrations (aircraft_id, registration_code, photo_filename, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(input.aircraft_id)
            .bind(&input.registration_code)
            .bind(&input.photo_filename)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a registration by its code.
    pub async fn find_by_code(
        pool: &SqlitePool,
        registration_code: &str,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM registrations WHERE registration_code = $1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(registration_code)
            .fetch_optional(pool)
            .await
    }

    /// List the registrations of an aircraft ordered by code (byte-wise).
    pub async fn list_by_aircraft(
        pool: &SqlitePool,
        aircraft_id: DbId,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM registrations
             WHERE aircraft_id = $1
             ORDER BY registration_code ASC"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(aircraft_id)
            .fetch_all(pool)
            .await
    }
}
