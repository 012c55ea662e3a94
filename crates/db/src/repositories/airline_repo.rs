//! Repository for the `airlines` table.

use sqlx::SqlitePool;
use tailbook_core::types::DbId;

use crate::models::airline::{Airline, CreateAirline};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides create and read operations for airlines.
pub struct AirlineRepo;

impl AirlineRepo {
    /// Insert a new airline, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateAirline) -> Result<Airline, sqlx::Error> {
        let query = format!("INSERT INTO airlines (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Airline>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an airline by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines WHERE id = $1");
        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an airline by exact (case-sensitive) name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines WHERE name = $1");
        sqlx::query_as::<_, Airline>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all airlines ordered by name.
    pub async fn list_by_name(pool: &SqlitePool) -> Result<Vec<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Airline>(&query).fetch_all(pool).await
    }

    /// List all airlines in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airlines ORDER BY id ASC");
        sqlx::query_as::<_, Airline>(&query).fetch_all(pool).await
    }
}
