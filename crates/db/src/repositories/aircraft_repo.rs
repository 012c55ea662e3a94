//! Repository for the `aircraft` table.

use sqlx::SqlitePool;
use tailbook_core::types::DbId;

use crate::models::aircraft::{Aircraft, AircraftChoice, CreateAircraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, airline_id, name, created_at";

/// Provides create and read operations for aircraft.
pub struct AircraftRepo;

impl AircraftRepo {
    /// Insert a new aircraft, returning the created row.
    ///
    /// Fails with a foreign key violation if `airline_id` does not exist.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateAircraft,
    ) -> Result<Aircraft, sqlx::Error> {
        let query = format!(
            "INSERT INTO aircraft (airline_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(input.airline_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an aircraft by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Aircraft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aircraft WHERE id = $1");
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the aircraft owned by an airline, in insertion order.
    pub async fn list_by_airline(
        pool: &SqlitePool,
        airline_id: DbId,
    ) -> Result<Vec<Aircraft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM aircraft WHERE airline_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Aircraft>(&query)
            .bind(airline_id)
            .fetch_all(pool)
            .await
    }

    /// List every aircraft with its airline's name, in insertion order.
    pub async fn list_choices(pool: &SqlitePool) -> Result<Vec<AircraftChoice>, sqlx::Error> {
        sqlx::query_as::<_, AircraftChoice>(
            "SELECT a.id, a.name, l.name AS airline_name
             FROM aircraft a
             JOIN airlines l ON l.id = a.airline_id
             ORDER BY a.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
