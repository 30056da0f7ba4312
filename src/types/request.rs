//! Request types
//!
//! Defines the chat completion request accepted by the gateway.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ChatMessage {
    /// Role of the author ("system", "user", "assistant", ...)
    #[schema(example = "user")]
    pub role: String,
    /// Text content of the message
    #[schema(example = "Hello!")]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Chat completion request
///
/// `model` carries the provider prefix (`openai/gpt-4o`). The router only
/// inspects the segment before the first `/`; the rest is forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ChatCompletionRequest {
    /// Prefixed model identifier
    #[schema(example = "openai/gpt-4o-mini")]
    pub model: String,
    /// Messages in the conversation (must not be empty)
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 0.7)]
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 256)]
    pub max_tokens: Option<u32>,
    /// Streaming flag (streaming responses are not served)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    /// Build a request with only the required fields set
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            max_tokens: None,
            stream: None,
        }
    }

    /// Whether the client asked for a streamed response
    pub fn is_stream(&self) -> bool {
        self.stream.unwrap_or(false)
    }

    /// Copy of this request with the model field replaced
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self.clone()
        }
    }
}
