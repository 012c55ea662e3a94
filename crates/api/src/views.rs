//! Askama template definitions for the admin forms and archive pages.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tailbook_db::models::aircraft::{Aircraft, AircraftChoice};
use tailbook_db::models::airline::Airline;
use tailbook_db::models::registration::Registration;

use crate::flash::Notice;

// ============================================
// Admin forms
// ============================================

#[derive(Template)]
#[template(path = "admin/add_airline.html")]
pub struct AddAirlineTemplate {
    pub notices: Vec<Notice>,
}

#[derive(Template)]
#[template(path = "admin/add_aircraft.html")]
pub struct AddAircraftTemplate {
    pub notices: Vec<Notice>,
    pub airlines: Vec<Airline>,
}

#[derive(Template)]
#[template(path = "admin/add_registration.html")]
pub struct AddRegistrationTemplate {
    pub notices: Vec<Notice>,
    pub aircraft_list: Vec<AircraftChoice>,
    /// Comma-separated `accept` attribute for the file input.
    pub accept: String,
}

// ============================================
// Archive
// ============================================

#[derive(Template)]
#[template(path = "archive/list_airlines.html")]
pub struct AirlinesTemplate {
    pub airlines: Vec<Airline>,
}

#[derive(Template)]
#[template(path = "archive/list_aircraft.html")]
pub struct AircraftListTemplate {
    pub airline: Airline,
    pub aircraft_list: Vec<Aircraft>,
}

#[derive(Template)]
#[template(path = "archive/list_registrations.html")]
pub struct RegistrationsTemplate {
    pub airline: Airline,
    pub aircraft: Aircraft,
    pub registrations: Vec<RegistrationRow>,
}

/// A registration prepared for display.
pub struct RegistrationRow {
    pub registration_code: String,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

impl From<Registration> for RegistrationRow {
    fn from(registration: Registration) -> Self {
        Self {
            registration_code: registration.registration_code,
            photo_url: registration
                .photo_filename
                .map(|name| format!("/archive/uploads/{name}")),
            notes: registration.notes,
        }
    }
}

#[derive(Template)]
#[template(path = "archive/imprint.html")]
pub struct ImprintTemplate;

// ============================================
// Errors
// ============================================

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub message: String,
}

// ============================================
// Response wrapper
// ============================================

/// Renders an askama template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Template rendering error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Template rendering failed",
                )
                    .into_response()
            }
        }
    }
}
