//! Response types
//!
//! Defines the normalized chat completion response and the provider
//! status snapshot.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Object type of every chat completion response
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
pub struct Usage {
    /// Number of tokens in the prompt
    #[schema(example = 10)]
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    #[schema(example = 10)]
    pub completion_tokens: u32,
    /// Total tokens used
    #[schema(example = 20)]
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Message in a completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ChoiceMessage {
    /// Role of the message author
    #[schema(example = "assistant")]
    pub role: String,
    /// Content of the message, `null` when the model produced none
    #[serde(default)]
    #[schema(example = "Hello! How can I help you today?")]
    pub content: Option<String>,
}

impl ChoiceMessage {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: Some(content.into()),
        }
    }
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Choice {
    /// Index of this choice
    #[schema(example = 0)]
    pub index: u32,
    /// The generated message
    pub message: ChoiceMessage,
    /// Reason the generation stopped
    #[serde(default)]
    #[schema(example = "stop")]
    pub finish_reason: Option<String>,
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ChatCompletionResponse {
    /// Unique identifier for this completion
    #[schema(example = "chatcmpl-abc123")]
    pub id: String,
    /// Object type (always "chat.completion")
    #[schema(example = "chat.completion")]
    pub object: String,
    /// Unix timestamp of creation
    #[schema(example = 1706745600)]
    pub created: i64,
    /// Model that produced the completion, without provider prefix
    #[schema(example = "gpt-4o-mini")]
    pub model: String,
    /// List of completion choices
    pub choices: Vec<Choice>,
    /// Token usage statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Configuration snapshot for one registered provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ProviderInfo {
    /// Human-readable provider name
    #[schema(example = "OpenAI")]
    pub name: String,
    /// Routing prefix used in model identifiers
    #[schema(example = "openai")]
    pub prefix: String,
    /// Whether the provider holds credentials
    pub configured: bool,
    /// Unprefixed model identifiers served by the provider
    pub available_models: Vec<String>,
}
