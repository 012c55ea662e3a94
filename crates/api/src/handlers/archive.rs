//! Handlers for the read-only `/archive` pages.

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::response::{IntoResponse, Response};
use tailbook_core::types::DbId;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::{AppError, AppResult};
use crate::records;
use crate::state::AppState;
use crate::views::{
    AircraftListTemplate, AirlinesTemplate, HtmlTemplate, ImprintTemplate, RegistrationRow,
    RegistrationsTemplate,
};

/// GET /archive/ and /archive/airlines
pub async fn list_airlines(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let airlines = records::list_airlines(&state.pool).await?;
    Ok(HtmlTemplate(AirlinesTemplate { airlines }))
}

/// GET /archive/airline/{id}/aircraft
pub async fn list_aircraft_for_airline(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = record_id(&raw_id, "airline")?;
    let airline = records::get_airline(&state.pool, id).await?;
    let aircraft_list = records::list_aircraft_for_airline(&state.pool, airline.id).await?;
    Ok(HtmlTemplate(AircraftListTemplate {
        airline,
        aircraft_list,
    }))
}

/// GET /archive/aircraft/{id}/registrations
pub async fn list_registrations_for_aircraft(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = record_id(&raw_id, "aircraft")?;
    let aircraft = records::get_aircraft(&state.pool, id).await?;
    let airline = records::get_airline(&state.pool, aircraft.airline_id).await?;
    let registrations = records::list_registrations_for_aircraft(&state.pool, aircraft.id)
        .await?
        .into_iter()
        .map(RegistrationRow::from)
        .collect();
    Ok(HtmlTemplate(RegistrationsTemplate {
        airline,
        aircraft,
        registrations,
    }))
}

/// Parse an id path segment. A segment that is not an `i64` cannot name a
/// row, so it is reported as not found rather than as a bad request.
fn record_id(raw: &str, entity: &'static str) -> AppResult<DbId> {
    raw.parse().map_err(|_| AppError::UnknownRecord {
        entity,
        raw: raw.to_string(),
    })
}

/// GET /archive/uploads/{filename}
///
/// Streams a stored upload. Only exact sanitized names are looked up; a
/// missing file yields 404.
pub async fn uploaded_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let path = state
        .uploads
        .resolve(&filename)
        .ok_or_else(|| AppError::UnknownUpload(filename.clone()))?;

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(response.map(Body::new))
}

/// GET /archive/imprint
pub async fn imprint() -> impl IntoResponse {
    HtmlTemplate(ImprintTemplate)
}
