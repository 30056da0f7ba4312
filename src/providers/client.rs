//! Shared HTTP plumbing for upstream providers

use reqwest::header::HeaderMap;
use serde_json::Value;

use super::error::{ProviderError, ProviderResult};
use crate::context::CallContext;

/// POST a JSON body to a provider and return the parsed JSON response
///
/// Transport failures, non-2xx statuses and non-JSON bodies all become
/// `UpstreamError` carrying the provider name and the failure message.
pub async fn post_json(
    client: &reqwest::Client,
    provider: &str,
    url: &str,
    headers: HeaderMap,
    body: &Value,
    ctx: &CallContext,
) -> ProviderResult<Value> {
    tracing::debug!(
        request_id = %ctx.request_id,
        provider = %provider,
        url = %url,
        "Sending request to upstream"
    );

    let response = client
        .post(url)
        .headers(headers)
        .json(body)
        .send()
        .await
        .map_err(|e| {
            ctx.log_upstream_error(provider, &e.to_string());
            ProviderError::upstream(provider, e)
        })?;

    let status = response.status();
    ctx.log_upstream_complete(provider, status.as_u16());

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        ctx.log_upstream_error(provider, &format!("status {}", status));
        return Err(ProviderError::UpstreamError(format!(
            "{} API error {}: {}",
            provider, status, text
        )));
    }

    response.json::<Value>().await.map_err(|e| {
        ctx.log_upstream_error(provider, &e.to_string());
        ProviderError::upstream(provider, e)
    })
}

/// Join a base URL and an endpoint path without doubling slashes
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
