//! Models endpoint integration tests
//!
//! Tests for:
//! - GET /v1/models - List models of configured providers
//! - GET /v1/models/{model_id} - Look up one prefixed model

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{auth_header, create_test_server, mixed_registry, unconfigured_registry};

#[tokio::test]
async fn test_list_models_only_configured_providers() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/models")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["object"], "list");

    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());

    let owners: Vec<&str> = data
        .iter()
        .map(|m| m["owned_by"].as_str().unwrap())
        .collect();
    assert!(owners.iter().all(|o| *o == "openai" || *o == "anthropic"));
    assert!(owners.contains(&"openai"));
    assert!(owners.contains(&"anthropic"));

    for model in data {
        assert_eq!(model["object"], "model");
        assert_eq!(model["created"], 1640000000);
        let id = model["id"].as_str().unwrap();
        assert!(id.starts_with(&format!("{}/", model["owned_by"].as_str().unwrap())));
    }
}

#[tokio::test]
async fn test_list_models_in_registration_order() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/models")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();

    let json: Value = response.json();
    let mut owners: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["owned_by"].as_str().unwrap())
        .collect();
    owners.dedup();

    assert_eq!(owners, vec!["openai", "anthropic"]);
    assert_eq!(json["data"][0]["id"], "openai/gpt-3.5-turbo");
}

#[tokio::test]
async fn test_list_models_empty_when_nothing_configured() {
    let server = create_test_server(unconfigured_registry());

    let response = server
        .get("/v1/models")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_model() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/models/openai/gpt-4o")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["id"], "openai/gpt-4o");
    assert_eq!(json["owned_by"], "openai");
}

#[tokio::test]
async fn test_get_model_from_unconfigured_provider() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/models/groq/mixtral-8x7b-32768")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}
