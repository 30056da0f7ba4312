//! OpenAI-compatible provider adapter
//!
//! Serves OpenAI, Groq and DeepSeek, which share the `/chat/completions`
//! wire format and bearer authentication.

use async_trait::async_trait;
use tracing::{instrument, warn};

use super::{
    client::{endpoint_url, post_json},
    error::{ProviderError, ProviderResult},
    headers::build_bearer_headers,
    kind::ProviderKind,
    ProviderAdapter,
};
use crate::context::CallContext;
use crate::translate::{MessageTranslator, OpenAITranslator};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Adapter for providers speaking the OpenAI chat completions API
pub struct OpenAICompatibleAdapter {
    kind: ProviderKind,
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    translator: OpenAITranslator,
}

impl OpenAICompatibleAdapter {
    /// Create a new adapter
    ///
    /// An empty API key is treated as absent.
    pub fn new(
        kind: ProviderKind,
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            kind,
            client,
            base_url: base_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
            translator: OpenAITranslator::new(),
        }
    }

    /// OpenAI adapter on the default endpoint
    pub fn openai(client: reqwest::Client, api_key: Option<String>) -> Self {
        let kind = ProviderKind::OpenAI;
        Self::new(kind, client, kind.default_base_url(), api_key)
    }

    /// Groq adapter on the default endpoint
    pub fn groq(client: reqwest::Client, api_key: Option<String>) -> Self {
        let kind = ProviderKind::Groq;
        Self::new(kind, client, kind.default_base_url(), api_key)
    }

    /// DeepSeek adapter on the default endpoint
    pub fn deepseek(client: reqwest::Client, api_key: Option<String>) -> Self {
        let kind = ProviderKind::DeepSeek;
        Self::new(kind, client, kind.default_base_url(), api_key)
    }
}

#[async_trait]
impl ProviderAdapter for OpenAICompatibleAdapter {
    fn provider_name(&self) -> &str {
        self.kind.display_name()
    }

    fn prefix(&self) -> &str {
        self.kind.prefix()
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn list_models(&self) -> Vec<String> {
        self.kind.models().iter().map(|m| m.to_string()).collect()
    }

    #[instrument(skip_all, fields(provider = %self.kind, request_id = %ctx.request_id))]
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
        if self.kind.enforces_model_list() && !self.kind.models().iter().any(|m| *m == model) {
            warn!(model = %model, "Model not in provider catalog");
            return Err(ProviderError::model_not_supported(model, provider));
        }

        let body = self.translator.translate_request(&request.with_model(model));
        let url = endpoint_url(&self.base_url, "chat/completions");
        let headers = build_bearer_headers(provider, api_key)?;

        let response = post_json(&self.client, provider, &url, headers, &body, ctx).await?;

        self.translator
            .translate_response(response)
            .map_err(|e| ProviderError::upstream(provider, e))
    }
}
