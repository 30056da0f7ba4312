//! Chat completions endpoint integration tests
//!
//! Tests for POST /v1/chat/completions:
//! - Routing by model prefix to mock adapters
//! - Error mapping for unknown, unconfigured and unsupported models
//! - Request validation

use axum::http::{header, StatusCode};
use serde_json::{json, Value};

use crate::common::{auth_header, create_test_server, mixed_registry};

fn hello(model: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": "Hello" }
        ]
    })
}

#[tokio::test]
async fn test_chat_completion_routes_to_openai() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("openai/gpt-3.5-turbo"))
        .await;

    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["object"], "chat.completion");
    assert_eq!(json["model"], "gpt-3.5-turbo");
    assert_eq!(json["id"], "chatcmpl-mock");
    assert_eq!(json["choices"].as_array().unwrap().len(), 1);
    assert_eq!(json["choices"][0]["message"]["role"], "assistant");
    assert_eq!(json["usage"]["total_tokens"], 20);
}

#[tokio::test]
async fn test_chat_completion_routes_to_anthropic() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("anthropic/claude-3-5-sonnet-20241022"))
        .await;

    response.assert_status_ok();

    let json: Value = response.json();
    assert_eq!(json["id"], "chatcmpl-mock-anthropic");
    assert_eq!(json["model"], "claude-3-5-sonnet-20241022");
}

#[tokio::test]
async fn test_chat_completion_model_without_prefix() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("invalid-model"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MODEL_NOT_FOUND");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("invalid-model"));
}

#[tokio::test]
async fn test_chat_completion_unknown_prefix() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("invalid/unknown-model"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MODEL_NOT_FOUND");
}

#[tokio::test]
async fn test_chat_completion_unconfigured_provider() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("groq/llama-3.1-70b"))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "PROVIDER_NOT_CONFIGURED");
    assert_eq!(
        json["error"]["message"],
        "Provider 'groq' is not configured"
    );
}

#[tokio::test]
async fn test_chat_completion_unsupported_model() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&hello("openai/not-a-real-model"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "MODEL_NOT_SUPPORTED");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("not-a-real-model"));
}

#[tokio::test]
async fn test_chat_completion_invalid_json() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .content_type("application/json")
        .bytes("not valid json".as_bytes().to_vec().into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_chat_completion_missing_messages() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&json!({ "model": "openai/gpt-4" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_completion_empty_messages() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&json!({ "model": "openai/gpt-4", "messages": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_completion_streaming_rejected() {
    let server = create_test_server(mixed_registry());

    let mut body = hello("openai/gpt-4");
    body["stream"] = json!(true);

    let response = server
        .post("/v1/chat/completions")
        .add_header(header::AUTHORIZATION, auth_header().parse().unwrap())
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_completion_requires_auth() {
    let server = create_test_server(mixed_registry());

    let response = server
        .post("/v1/chat/completions")
        .json(&hello("openai/gpt-3.5-turbo"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
