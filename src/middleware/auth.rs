//! Authentication middleware
//!
//! Checks the bearer token against the configured credential store and
//! attaches a `CallContext` to the request.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};

use super::credentials::{hash_token, Principal};
use crate::{context::CallContext, error::AppError, AppState};

/// Header carrying a caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extract the Authorization header and return the bearer token
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Build the context for an authenticated request
///
/// Uses the caller's `x-request-id` when present and non-empty.
pub fn call_context(headers: &HeaderMap, principal: Principal) -> CallContext {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| !id.is_empty())
        .map(|id| CallContext::with_request_id(id))
        .unwrap_or_default()
        .with_user_id(principal.user_id)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Asks the credential store for the matching principal
/// 3. Adds a `CallContext` to request extensions
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or(AppError::Unauthorized)?;

    let principal = match state.credentials.authenticate(token).await {
        Some(principal) => principal,
        None => {
            warn!(token_hash = %hash_token(token), "Rejected gateway token");
            return Err(AppError::InvalidToken);
        }
    };

    let ctx = call_context(request.headers(), principal);

    debug!(
        request_id = %ctx.request_id,
        user_id = ?ctx.user_id,
        "Caller authenticated"
    );

    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
