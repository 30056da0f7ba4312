//! Health endpoint integration tests
//!
//! Tests for the health check endpoints:
//! - GET /health - Full health check with provider counts
//! - GET /health/ready - Readiness probe
//! - GET /health/live - Liveness probe

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{create_test_server, mixed_registry, unconfigured_registry};

#[tokio::test]
async fn test_health_reports_provider_counts() {
    let server = create_test_server(mixed_registry());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["providers"]["registered"], 4);
    assert_eq!(json["providers"]["configured"], 2);
    assert!(json.get("uptime_seconds").is_some());
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_health_unhealthy_without_providers() {
    let server = create_test_server(unconfigured_registry());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = response.json();
    assert_eq!(json["status"], "unhealthy");
}

#[tokio::test]
async fn test_readiness() {
    let ready = create_test_server(mixed_registry());
    ready.get("/health/ready").await.assert_status_ok();

    let not_ready = create_test_server(unconfigured_registry());
    not_ready
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_liveness() {
    let server = create_test_server(unconfigured_registry());

    let response = server.get("/health/live").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_health_wrong_method() {
    let server = create_test_server(mixed_registry());

    let response = server.post("/health").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
