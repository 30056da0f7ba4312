//! Deterministic mock adapters
//!
//! One `MockAdapter` per provider kind answers without touching the network.
//! Used when the gateway runs in testing mode and throughout the test suite.

use async_trait::async_trait;

use super::{
    error::{ProviderError, ProviderResult},
    kind::ProviderKind,
    ProviderAdapter,
};
use crate::context::CallContext;
use crate::types::{
    response::CHAT_COMPLETION_OBJECT, ChatCompletionRequest, ChatCompletionResponse, Choice,
    ChoiceMessage, Usage,
};

/// Mock adapter for one provider
#[derive(Debug, Clone)]
pub struct MockAdapter {
    kind: ProviderKind,
    name: String,
    configured: bool,
    failure: Option<String>,
}

impl MockAdapter {
    /// Create a configured mock for the given provider
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            name: format!("{} (Mock)", kind.display_name()),
            configured: true,
            failure: None,
        }
    }

    /// Mock that behaves like an adapter without credentials
    pub fn unconfigured(kind: ProviderKind) -> Self {
        Self {
            configured: false,
            ..Self::new(kind)
        }
    }

    /// Make every completion fail upstream with the given message
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Mocks for every known provider
    pub fn all() -> Vec<Self> {
        ProviderKind::ALL.into_iter().map(Self::new).collect()
    }

    fn completion_id(&self) -> String {
        match self.kind {
            ProviderKind::OpenAI => "chatcmpl-mock".to_string(),
            kind => format!("chatcmpl-mock-{}", kind.prefix()),
        }
    }

    fn usage(&self) -> Usage {
        match self.kind {
            ProviderKind::OpenAI => Usage::new(10, 10),
            ProviderKind::Anthropic => Usage::new(12, 12),
            ProviderKind::Groq => Usage::new(8, 8),
            ProviderKind::DeepSeek => Usage::new(9, 9),
        }
    }
}

#[async_trait]
impl ProviderAdapter for MockAdapter {
    fn provider_name(&self) -> &str {
        &self.name
    }

    fn prefix(&self) -> &str {
        self.kind.prefix()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn list_models(&self) -> Vec<String> {
        self.kind.models().iter().map(|m| m.to_string()).collect()
    }

    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
        ctx: &CallContext,
    ) -> ProviderResult<ChatCompletionResponse> {
        if !self.configured {
            return Err(ProviderError::not_configured(self.kind.display_name()));
        }

        let model = self.strip_prefix(&request.model);
        if self.kind.enforces_model_list() && !self.kind.models().iter().any(|m| *m == model) {
            return Err(ProviderError::model_not_supported(model, self.kind.display_name()));
        }

        if let Some(message) = &self.failure {
            ctx.log_upstream_error(&self.name, message);
            return Err(ProviderError::upstream(self.kind.display_name(), message));
        }

        Ok(ChatCompletionResponse {
            id: self.completion_id(),
            object: CHAT_COMPLETION_OBJECT.to_string(),
            created: chrono::Utc::now().timestamp(),
            model: model.to_string(),
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage::assistant(format!(
                    "This is a mock response from {} adapter.",
                    self.kind.display_name()
                )),
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(self.usage()),
        })
    }
}
