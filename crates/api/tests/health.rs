//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, uploads.path());
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_degraded_without_database(pool: SqlitePool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool.clone(), uploads.path());
    pool.close().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, uploads.path());
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn responses_carry_request_id(pool: SqlitePool) {
    let uploads = tempfile::tempdir().unwrap();
    let app = common::build_test_app(pool, uploads.path());
    let response = get(&app, "/archive/imprint").await;

    assert!(response.headers().contains_key("x-request-id"));
}
