//! Provider status endpoint

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use crate::{context::CallContext, error::ErrorResponse, types::ProviderInfo, AppState};

/// Report every registered provider and whether it is configured
#[utoipa::path(
    get,
    path = "/v1/providers",
    tag = "Providers",
    responses(
        (status = 200, description = "One entry per registered provider", body = [ProviderInfo]),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_providers(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<CallContext>,
) -> Json<Vec<ProviderInfo>> {
    Json(state.router.provider_status(&ctx))
}
