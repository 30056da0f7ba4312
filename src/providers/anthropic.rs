//! Anthropic provider adapter
//!
//! Calls the Messages API (`POST {base}/messages`) and normalizes the reply
//! through `AnthropicTranslator`. Model availability is left to the API.

use async_trait::async_trait;
use tracing::instrument;

use super::{
    client::{endpoint_url, post_json},
    error::{ProviderError, ProviderResult},
    headers::build_anthropic_headers,
    kind::ProviderKind,
    ProviderAdapter,
};
use crate::context::CallContext;
use crate::translate::{AnthropicTranslator, MessageTranslator};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Anthropic Messages API adapter
pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    translator: AnthropicTranslator,
}

impl AnthropicAdapter {
    /// Create a new Anthropic adapter
    ///
    /// An empty API key is treated as absent.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            translator: AnthropicTranslator::new(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn provider_name(&self) -> &str {
        ProviderKind::Anthropic.display_name()
    }

    fn prefix(&self) -> &str {
        ProviderKind::Anthropic.prefix()
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn list_models(&self) -> Vec<String> {
        ProviderKind::Anthropic
            .models()
            .iter()
            .map(|m| m.to_string())
            .collect()
    }

    #[instrument(skip_all, fields(provider = "anthropic", request_id = %ctx.request_id))]
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
        ctx: &CallContext,
    ) -> ProviderResult<ChatCompletionResponse> {
        let provider = self.provider_name();
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::not_configured(provider))?;

        let model = self.strip_prefix(&request.model);
        let body = self.translator.translate_request(&request.with_model(model));
        let url = endpoint_url(&self.base_url, "messages");
        let headers = build_anthropic_headers(provider, api_key)?;

        let response = post_json(&self.client, provider, &url, headers, &body, ctx).await?;

        self.translator
            .translate_response(response)
            .map_err(|e| ProviderError::upstream(provider, e))
    }
}
