//! Handlers for the `/admin` record forms.
//!
//! GET renders the form with any queued notices. POST delegates to the
//! record service; on success a success notice is queued and the browser is
//! redirected back to the same form, on a recoverable error the notice is
//! shown on a re-rendered form.

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tailbook_core::photos::ALLOWED_PHOTO_EXTENSIONS;
use tower_sessions::Session;

use crate::error::{AppError, AppResult};
use crate::flash::{self, Notice};
use crate::records::{self, NewRegistration, PhotoUpload};
use crate::state::AppState;
use crate::views::{AddAircraftTemplate, AddAirlineTemplate, AddRegistrationTemplate, HtmlTemplate};

const ADD_AIRLINE_PATH: &str = "/admin/add_airline";
const ADD_AIRCRAFT_PATH: &str = "/admin/add_aircraft";
const ADD_REGISTRATION_PATH: &str = "/admin/add_registration";

#[derive(Debug, Deserialize)]
pub struct AirlineForm {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AircraftForm {
    pub name: Option<String>,
    pub airline_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Airline
// ---------------------------------------------------------------------------

/// GET /admin/add_airline
pub async fn add_airline_form(session: Session) -> AppResult<Response> {
    render_add_airline(&session).await
}

/// POST /admin/add_airline
pub async fn add_airline(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AirlineForm>,
) -> AppResult<Response> {
    match records::create_airline(&state.pool, form.name.as_deref()).await {
        Ok(airline) => {
            let message = format!("Airline \"{}\" added successfully.", airline.name);
            flash::push(&session, Notice::success(message)).await?;
            Ok(Redirect::to(ADD_AIRLINE_PATH).into_response())
        }
        Err(err) => {
            recover(&session, err).await?;
            render_add_airline(&session).await
        }
    }
}

async fn render_add_airline(session: &Session) -> AppResult<Response> {
    let notices = flash::take(session).await?;
    Ok(HtmlTemplate(AddAirlineTemplate { notices }).into_response())
}

// ---------------------------------------------------------------------------
// Aircraft
// ---------------------------------------------------------------------------

/// GET /admin/add_aircraft
pub async fn add_aircraft_form(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    render_add_aircraft(&state, &session).await
}

/// POST /admin/add_aircraft
pub async fn add_aircraft(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AircraftForm>,
) -> AppResult<Response> {
    let created = records::create_aircraft(
        &state.pool,
        form.name.as_deref(),
        form.airline_id.as_deref(),
    )
    .await;

    match created {
        Ok((aircraft, airline)) => {
            let message = format!(
                "Aircraft \"{}\" added successfully for {}.",
                aircraft.name, airline.name
            );
            flash::push(&session, Notice::success(message)).await?;
            Ok(Redirect::to(ADD_AIRCRAFT_PATH).into_response())
        }
        Err(err) => {
            recover(&session, err).await?;
            render_add_aircraft(&state, &session).await
        }
    }
}

async fn render_add_aircraft(state: &AppState, session: &Session) -> AppResult<Response> {
    let airlines = records::list_airline_choices(&state.pool).await?;
    let notices = flash::take(session).await?;
    Ok(HtmlTemplate(AddAircraftTemplate { notices, airlines }).into_response())
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// GET /admin/add_registration
pub async fn add_registration_form(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Response> {
    render_add_registration(&state, &session).await
}

/// POST /admin/add_registration
///
/// Accepts a multipart form with `registration_code`, `aircraft_id`,
/// optional `notes` and an optional `photo` file.
pub async fn add_registration(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> AppResult<Response> {
    let input = read_registration_form(multipart).await?;
    let submitted_photo = input.photo.as_ref().map(|p| p.file_name.clone());

    match records::create_registration(&state.pool, &state.uploads, input).await {
        Ok((registration, aircraft)) => {
            let message = format!(
                "Registration \"{}\" added successfully for {}.",
                registration.registration_code, aircraft.name
            );
            flash::push(&session, Notice::success(message)).await?;

            if let (Some(file_name), None) = (submitted_photo, &registration.photo_filename) {
                let message = format!(
                    "Photo \"{file_name}\" was ignored. Accepted formats: {}.",
                    ALLOWED_PHOTO_EXTENSIONS.join(", ")
                );
                flash::push(&session, Notice::info(message)).await?;
            }

            Ok(Redirect::to(ADD_REGISTRATION_PATH).into_response())
        }
        Err(err) => {
            recover(&session, err).await?;
            render_add_registration(&state, &session).await
        }
    }
}

async fn render_add_registration(state: &AppState, session: &Session) -> AppResult<Response> {
    let aircraft_list = records::list_aircraft_choices(&state.pool).await?;
    let notices = flash::take(session).await?;
    let accept = ALLOWED_PHOTO_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");
    Ok(HtmlTemplate(AddRegistrationTemplate {
        notices,
        aircraft_list,
        accept,
    })
    .into_response())
}

/// Collect the registration form fields. Unknown fields are ignored; a file
/// input left empty (no filename) counts as no photo.
async fn read_registration_form(mut multipart: Multipart) -> AppResult<NewRegistration> {
    let mut input = NewRegistration::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !file_name.is_empty() {
                    input.photo = Some(PhotoUpload { file_name, data });
                }
            }
            "registration_code" | "aircraft_id" | "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                match name.as_str() {
                    "registration_code" => input.registration_code = Some(text),
                    "aircraft_id" => input.aircraft_id = Some(text),
                    _ => input.notes = Some(text),
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(input)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Turn a recoverable record-service error into a queued notice.
///
/// Anything that is not a domain error with a notice propagates and
/// becomes an error page.
async fn recover(session: &Session, err: AppError) -> AppResult<()> {
    let AppError::Core(core) = err else {
        return Err(err);
    };
    let notice = Notice::from_core_error(&core);

    tracing::info!(level = %notice.level, message = %notice.message, "Admin form rejected");
    flash::push(session, notice).await?;
    Ok(())
}
