//! Models endpoints
//!
//! Lists the prefixed models of every configured provider.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    context::CallContext,
    error::{AppError, AppResult, ErrorResponse},
    AppState,
};

/// Fixed creation timestamp reported for every model
pub const MODEL_CREATED: i64 = 1640000000;

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Model {
    /// Prefixed model identifier
    #[schema(example = "openai/gpt-4o")]
    pub id: String,
    pub object: String,
    pub created: i64,
    /// Provider prefix
    #[schema(example = "openai")]
    pub owned_by: String,
}

impl Model {
    fn from_id(id: String) -> Self {
        let owned_by = id
            .split_once('/')
            .map(|(prefix, _)| prefix.to_string())
            .unwrap_or_default();

        Self {
            id,
            object: "model".to_string(),
            created: MODEL_CREATED,
            owned_by,
        }
    }
}

/// Models list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ModelsResponse {
    pub object: String,
    pub data: Vec<Model>,
}

fn available_models(state: &AppState, ctx: &CallContext) -> Vec<Model> {
    state
        .router
        .list_all_models(ctx)
        .into_iter()
        .flat_map(|(_, ids)| ids)
        .map(Model::from_id)
        .collect()
}

/// List available models
#[utoipa::path(
    get,
    path = "/v1/models",
    tag = "Models",
    responses(
        (status = 200, description = "Models of configured providers", body = ModelsResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_models(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<CallContext>,
) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        object: "list".to_string(),
        data: available_models(&state, &ctx),
    })
}

/// Get a single model
///
/// The id contains a `/`, so the path parameter captures the remainder.
#[utoipa::path(
    get,
    path = "/v1/models/{model_id}",
    tag = "Models",
    params(("model_id" = String, Path, description = "Prefixed model identifier")),
    responses(
        (status = 200, description = "Model details", body = Model),
        (status = 404, description = "Model not available", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_model(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<CallContext>,
    Path(model_id): Path<String>,
) -> AppResult<Json<Model>> {
    available_models(&state, &ctx)
        .into_iter()
        .find(|model| model.id == model_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Model {} not found", model_id)))
}
