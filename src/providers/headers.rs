//! Header utilities for upstream provider calls
//!
//! Outbound requests carry only the provider's own credentials. Client
//! headers (including the gateway bearer token) are never forwarded.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::error::{ProviderError, ProviderResult};

/// Anthropic API version sent with every Messages API call
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

fn header_value(provider: &str, value: &str) -> ProviderResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ProviderError::upstream(provider, "API key contains invalid header characters"))
}

/// Build headers for OpenAI-compatible APIs (`Authorization: Bearer <key>`)
pub fn build_bearer_headers(provider: &str, api_key: &str) -> ProviderResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        header_value(provider, &format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}

/// Build headers for the Anthropic Messages API
pub fn build_anthropic_headers(provider: &str, api_key: &str) -> ProviderResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert("x-api-key", header_value(provider, api_key)?);
    headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
