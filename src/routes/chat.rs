//! Chat completions endpoint
//!
//! OpenAI-compatible chat completions, dispatched to a provider by the
//! prefix of the requested model.

use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use tracing::info;

use crate::{
    context::CallContext,
    error::{AppError, AppResult, ErrorResponse},
    types::{ChatCompletionRequest, ChatCompletionResponse},
    AppState,
};

/// Reject requests the gateway cannot serve before routing them
pub fn validate_chat_request(request: &ChatCompletionRequest) -> AppResult<()> {
    if request.messages.is_empty() {
        return Err(AppError::BadRequest("messages must not be empty".to_string()));
    }
    if request.is_stream() {
        return Err(AppError::BadRequest(
            "Streaming responses are not supported".to_string(),
        ));
    }
    Ok(())
}

/// Handle chat completion requests
///
/// The request body is parsed by hand so malformed JSON surfaces as
/// `BAD_REQUEST` in the gateway's error format.
#[utoipa::path(
    post,
    path = "/v1/chat/completions",
    tag = "Chat",
    request_body = ChatCompletionRequest,
    responses(
        (status = 200, description = "Completion from the selected provider", body = ChatCompletionResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Unknown model or prefix", body = ErrorResponse),
        (status = 502, description = "Upstream provider failed", body = ErrorResponse),
        (status = 503, description = "Provider not configured", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn chat_completions(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<CallContext>,
    body: axum::body::Bytes,
) -> AppResult<Json<ChatCompletionResponse>> {
    let request: ChatCompletionRequest = serde_json::from_slice(&body).map_err(|e| {
        ctx.log_rejected("invalid request body");
        AppError::BadRequest(format!("Invalid request body: {}", e))
    })?;

    validate_chat_request(&request).inspect_err(|e| ctx.log_rejected(&e.to_string()))?;

    info!(
        request_id = %ctx.request_id,
        model = %request.model,
        messages = %request.messages.len(),
        "Processing chat completion request"
    );

    let response = state.router.route_chat_completion(&request, &ctx).await?;

    info!(
        request_id = %ctx.request_id,
        model = %response.model,
        elapsed_ms = %ctx.elapsed_ms(),
        "Chat completion request completed"
    );

    Ok(Json(response))
}
