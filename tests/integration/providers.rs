//! Provider status endpoint integration tests

use axum::http::header;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{auth_header, create_test_server, mixed_registry, unconfigured_registry};

#[tokio::test]
async fn test_providers_lists_every_registered_provider() {
    let server = create_test_server(mixed_registry());

    let response = server
        .get("/v1/providers")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();

    let json: Value = response.json();
    let providers = json.as_array().unwrap();
    assert_eq!(providers.len(), 4);

    let flags: Vec<(&str, bool)> = providers
        .iter()
        .map(|p| (p["prefix"].as_str().unwrap(), p["configured"].as_bool().unwrap()))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("openai", true),
            ("anthropic", true),
            ("groq", false),
            ("deepseek", false),
        ]
    );

    // Unconfigured providers still report their catalog
    assert!(!providers[2]["available_models"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(providers[0]["name"], "OpenAI (Mock)");
}

#[tokio::test]
async fn test_providers_reported_when_nothing_configured() {
    let server = create_test_server(unconfigured_registry());

    let response = server
        .get("/v1/providers")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    let providers = json.as_array().unwrap();
    assert_eq!(providers.len(), 4);
    assert!(providers.iter().all(|p| p["configured"] == false));
}
