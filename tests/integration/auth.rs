//! Gateway authentication integration tests

use axum::http::{header, StatusCode};
use serde_json::Value;

use crate::common::{auth_header, create_test_server, mixed_registry};

#[tokio::test]
async fn test_missing_authorization_header() {
    let server = create_test_server(mixed_registry());

    let response = server.get("/v1/models").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid or missing API key");
}

#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/models")
        .add_header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_token_rejected() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/providers")
        .add_header(header::AUTHORIZATION, "Bearer not-a-token".parse().unwrap())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    assert_eq!(json["error"]["message"], "Invalid API key");
}

#[tokio::test]
async fn test_valid_token_with_request_id() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/providers")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .add_header(
            header::HeaderName::from_static("x-request-id"),
            "req-abc".parse().unwrap(),
        )
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_health_needs_no_auth() {
    let server = create_test_server(mixed_registry());

    server.get("/health/live").await.assert_status_ok();
}
