//! Route definitions for the public archive.

use axum::routing::get;
use axum::Router;

use crate::handlers::archive;
use crate::state::AppState;

/// Archive routes. All read-only.
///
/// ```text
/// GET /archive/                              -> list_airlines
/// GET /archive/airlines                      -> list_airlines
/// GET /archive/airline/{id}/aircraft         -> list_aircraft_for_airline
/// GET /archive/aircraft/{id}/registrations   -> list_registrations_for_aircraft
/// GET /archive/uploads/{filename}            -> uploaded_file
/// GET /archive/imprint                       -> imprint
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/archive/", get(archive::list_airlines))
        .route("/archive/airlines", get(archive::list_airlines))
        .route(
            "/archive/airline/{id}/aircraft",
            get(archive::list_aircraft_for_airline),
        )
        .route(
            "/archive/aircraft/{id}/registrations",
            get(archive::list_registrations_for_aircraft),
        )
        .route("/archive/uploads/{filename}", get(archive::uploaded_file))
        .route("/archive/imprint", get(archive::imprint))
}
