//! OpenAPI specification for the gateway
//!
//! Aggregates the `/v1` and health endpoints and their schemas into a single
//! OpenAPI document.

use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    error::{ErrorBody, ErrorResponse},
    routes::{
        health::{HealthResponse, HealthStatus, ProviderStats, SimpleHealthResponse},
        models::{Model, ModelsResponse},
    },
    types::{
        ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ChoiceMessage,
        ProviderInfo, Usage,
    },
};

/// OpenAPI specification for the Model Router API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Model Router API",
        version = "1.0.0",
        description = "OpenAI-compatible gateway that routes chat completions to AI providers by model prefix"
    ),
    paths(
        crate::routes::chat::chat_completions,
        crate::routes::models::list_models,
        crate::routes::models::get_model,
        crate::routes::providers::list_providers,
        crate::routes::health::health_check,
        crate::routes::health::readiness_check,
        crate::routes::health::liveness_check,
    ),
    components(
        schemas(
            // Request
            ChatMessage,
            ChatCompletionRequest,
            // Response
            Usage,
            ChoiceMessage,
            Choice,
            ChatCompletionResponse,
            ProviderInfo,
            Model,
            ModelsResponse,
            // Health
            HealthStatus,
            ProviderStats,
            HealthResponse,
            SimpleHealthResponse,
            // Error
            ErrorBody,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Chat", description = "Chat completion endpoints"),
        (name = "Models", description = "Model listing"),
        (name = "Providers", description = "Provider status"),
        (name = "Health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Security scheme addon for gateway bearer tokens
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
