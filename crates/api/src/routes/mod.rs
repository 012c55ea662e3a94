pub mod admin;
pub mod archive;
pub mod health;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                        redirect to /archive/
/// /health                                  health check (JSON)
///
/// /admin/add_airline                       form, create
/// /admin/add_aircraft                      form, create
/// /admin/add_registration                  form, create (multipart)
///
/// /archive/                                list airlines
/// /archive/airlines                        list airlines
/// /archive/airline/{id}/aircraft           list aircraft of airline
/// /archive/aircraft/{id}/registrations     list registrations of aircraft
/// /archive/uploads/{filename}              stored photo
/// /archive/imprint                         static page
/// ```
pub fn app_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/archive/") }))
        .merge(health::router())
        .merge(admin::router(config.max_upload_bytes))
        .merge(archive::router())
}
