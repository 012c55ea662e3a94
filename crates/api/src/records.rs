//! Record service: create and browse airlines, aircraft and registrations.
//!
//! Every operation takes the database pool (and, for uploads, the
//! [`UploadStore`]) explicitly. Create operations validate their raw form
//! input and report recoverable outcomes as [`CoreError`]:
//!
//! - `Validation`: a required field is missing or a reference is malformed
//! - `Duplicate`: the airline name or registration code is taken
//! - `NotFound`: a referenced parent row does not exist
//!
//! Each create is one auto-committed insert. Existence checks are
//! check-then-act; a unique violation from a concurrent insert is still
//! reported as `Duplicate`, and a photo stored for a failed insert is
//! removed again.

use axum::body::Bytes;
use tailbook_core::error::CoreError;
use tailbook_core::photos::stored_photo_name;
use tailbook_core::types::DbId;
use tailbook_core::validation::{optional_text, parse_reference, required_text};
use tailbook_db::models::aircraft::{Aircraft, AircraftChoice, CreateAircraft};
use tailbook_db::models::airline::{Airline, CreateAirline};
use tailbook_db::models::registration::{CreateRegistration, Registration};
use tailbook_db::repositories::{AircraftRepo, AirlineRepo, RegistrationRepo};
use tailbook_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::storage::UploadStore;

/// An uploaded file as received from the admin form.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename reported by the browser; untrusted.
    pub file_name: String,
    pub data: Bytes,
}

/// Raw input for [`create_registration`], one field per form control.
#[derive(Debug, Clone, Default)]
pub struct NewRegistration {
    pub registration_code: Option<String>,
    pub aircraft_id: Option<String>,
    pub notes: Option<String>,
    pub photo: Option<PhotoUpload>,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Create an airline with a unique, non-empty name.
pub async fn create_airline(pool: &DbPool, name: Option<&str>) -> AppResult<Airline> {
    let name = required_text(name)
        .ok_or_else(|| CoreError::Validation("Airline name is required.".into()))?;

    if AirlineRepo::find_by_name(pool, &name).await?.is_some() {
        return Err(duplicate_airline(&name));
    }

    let airline = AirlineRepo::create(pool, &CreateAirline { name: name.clone() })
        .await
        .map_err(AppError::from)
        .map_err(|e| if e.is_unique_violation() { duplicate_airline(&name) } else { e })?;

    tracing::info!(airline_id = airline.id, name = %airline.name, "Airline created");
    Ok(airline)
}

/// Create an aircraft under an existing airline.
///
/// Returns the new aircraft together with its airline.
pub async fn create_aircraft(
    pool: &DbPool,
    name: Option<&str>,
    airline_id: Option<&str>,
) -> AppResult<(Aircraft, Airline)> {
    let (Some(name), Some(airline_ref)) = (required_text(name), required_text(airline_id)) else {
        return Err(
            CoreError::Validation("Aircraft name and airline are required.".into()).into(),
        );
    };

    let airline_id = parse_reference(&airline_ref, "airline")?;
    let airline = get_airline(pool, airline_id).await?;

    let aircraft = AircraftRepo::create(pool, &CreateAircraft { airline_id, name }).await?;

    tracing::info!(
        aircraft_id = aircraft.id,
        airline_id,
        name = %aircraft.name,
        "Aircraft created"
    );
    Ok((aircraft, airline))
}

/// Create a registration under an existing aircraft, storing its photo.
///
/// A photo whose filename does not carry an allowed extension is dropped:
/// the registration is created without a photo and no error is raised.
/// Callers can detect this by comparing `input.photo` with the returned
/// row's `photo_filename`.
///
/// Returns the new registration together with its aircraft.
pub async fn create_registration(
    pool: &DbPool,
    uploads: &UploadStore,
    input: NewRegistration,
) -> AppResult<(Registration, Aircraft)> {
    let (Some(code), Some(aircraft_ref)) = (
        required_text(input.registration_code.as_deref()),
        required_text(input.aircraft_id.as_deref()),
    ) else {
        return Err(CoreError::Validation(
            "Registration code and aircraft are required.".into(),
        )
        .into());
    };

    let aircraft_id = parse_reference(&aircraft_ref, "aircraft")?;
    let aircraft = get_aircraft(pool, aircraft_id).await?;

    if RegistrationRepo::find_by_code(pool, &code).await?.is_some() {
        return Err(duplicate_registration(&code));
    }

    let photo_filename = match input.photo {
        Some(photo) => store_photo(uploads, &code, photo).await?,
        None => None,
    };

    let create = CreateRegistration {
        aircraft_id,
        registration_code: code.clone(),
        photo_filename,
        notes: optional_text(input.notes.as_deref()),
    };

    let registration = match RegistrationRepo::create(pool, &create).await {
        Ok(registration) => registration,
        Err(err) => {
            if let Some(stored) = &create.photo_filename {
                discard_photo(uploads, stored).await;
            }
            let err = AppError::from(err);
            return Err(if err.is_unique_violation() {
                duplicate_registration(&code)
            } else {
                err
            });
        }
    };

    tracing::info!(
        registration_id = registration.id,
        aircraft_id,
        code = %registration.registration_code,
        photo = ?registration.photo_filename,
        "Registration created"
    );
    Ok((registration, aircraft))
}

/// Persist an allowed photo and return its stored filename.
async fn store_photo(
    uploads: &UploadStore,
    code: &str,
    photo: PhotoUpload,
) -> AppResult<Option<String>> {
    let Some(name) = stored_photo_name(&photo.file_name) else {
        tracing::warn!(
            code,
            file_name = %photo.file_name,
            "Dropping photo with disallowed extension"
        );
        return Ok(None);
    };

    let stored = uploads.save(&name, &photo.data).await?;
    Ok(Some(stored))
}

/// Remove a photo whose registration was never inserted.
async fn discard_photo(uploads: &UploadStore, stored: &str) {
    if let Err(err) = uploads.remove(stored).await {
        tracing::warn!(file = stored, error = %err, "Failed to remove orphaned photo");
    }
}

fn duplicate_airline(name: &str) -> AppError {
    CoreError::Duplicate(format!("Airline \"{name}\" already exists.")).into()
}

fn duplicate_registration(code: &str) -> AppError {
    CoreError::Duplicate(format!("Registration \"{code}\" already exists.")).into()
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// All airlines ordered by name.
pub async fn list_airlines(pool: &DbPool) -> AppResult<Vec<Airline>> {
    Ok(AirlineRepo::list_by_name(pool).await?)
}

/// Airlines offered as parents on the aircraft form, in insertion order.
pub async fn list_airline_choices(pool: &DbPool) -> AppResult<Vec<Airline>> {
    Ok(AirlineRepo::list(pool).await?)
}

/// Aircraft offered as parents on the registration form, in insertion order.
pub async fn list_aircraft_choices(pool: &DbPool) -> AppResult<Vec<AircraftChoice>> {
    Ok(AircraftRepo::list_choices(pool).await?)
}

pub async fn get_airline(pool: &DbPool, id: DbId) -> AppResult<Airline> {
    AirlineRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "airline",
            id,
        }))
}

pub async fn get_aircraft(pool: &DbPool, id: DbId) -> AppResult<Aircraft> {
    AircraftRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "aircraft",
            id,
        }))
}

/// The airline's aircraft in insertion order.
pub async fn list_aircraft_for_airline(pool: &DbPool, airline_id: DbId) -> AppResult<Vec<Aircraft>> {
    Ok(AircraftRepo::list_by_airline(pool, airline_id).await?)
}

/// The aircraft's registrations sorted by registration code.
pub async fn list_registrations_for_aircraft(
    pool: &DbPool,
    aircraft_id: DbId,
) -> AppResult<Vec<Registration>> {
    Ok(RegistrationRepo::list_by_aircraft(pool, aircraft_id).await?)
}
