//! Route definitions for the admin record forms.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET    /admin/add_airline        -> add_airline_form
/// POST   /admin/add_airline        -> add_airline
/// GET    /admin/add_aircraft       -> add_aircraft_form
/// POST   /admin/add_aircraft       -> add_aircraft
/// GET    /admin/add_registration   -> add_registration_form
/// POST   /admin/add_registration   -> add_registration
/// ```
///
/// Request bodies are capped at `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/admin/add_airline",
            get(admin::add_airline_form).post(admin::add_airline),
        )
        .route(
            "/admin/add_aircraft",
            get(admin::add_aircraft_form).post(admin::add_aircraft),
        )
        .route(
            "/admin/add_registration",
            get(admin::add_registration_form).post(admin::add_registration),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
