//! Anthropic translator implementation
//!
//! Translates between the gateway format and Anthropic's Messages API:
//! - system messages move to the top-level `system` field
//! - `max_tokens` is mandatory upstream and gets a default
//! - text content blocks are joined into one assistant message
//! - `input_tokens`/`output_tokens` become prompt/completion usage

use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::{MessageTranslator, TranslationError};
use crate::types::{
    response::CHAT_COMPLETION_OBJECT, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    Choice, ChoiceMessage, Usage,
};

/// `max_tokens` sent when the client did not set one
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic Messages API translator
#[derive(Debug, Clone, Default)]
pub struct AnthropicTranslator;

impl AnthropicTranslator {
    /// Create a new Anthropic translator
    pub fn new() -> Self {
        Self
    }
}

/// Split system messages from the conversation
///
/// Returns the system prompt (all system texts joined by newlines) and the
/// remaining messages in their original order.
pub fn extract_system_prompt(messages: &[ChatMessage]) -> (Option<String>, Vec<&ChatMessage>) {
    let mut system_texts = Vec::new();
    let mut non_system_messages = Vec::new();

    for message in messages {
        if message.role == "system" {
            system_texts.push(message.content.as_str());
        } else {
            non_system_messages.push(message);
        }
    }

    let system_prompt = if system_texts.is_empty() {
        None
    } else {
        Some(system_texts.join("\n"))
    };

    (system_prompt, non_system_messages)
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    id: String,
    model: String,
    #[serde(default)]
    content: Vec<AnthropicContentBlock>,
    stop_reason: Option<String>,
    usage: Option<AnthropicUsage>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessageTranslator for AnthropicTranslator {
    fn translate_request(&self, request: &ChatCompletionRequest) -> Value {
        let (system, messages) = extract_system_prompt(&request.messages);

        let mut body = Map::new();
        body.insert("model".to_string(), json!(request.model));
        body.insert(
            "max_tokens".to_string(),
            json!(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
        );
        body.insert("messages".to_string(), json!(messages));
        if let Some(system) = system {
            body.insert("system".to_string(), json!(system));
        }
        if let Some(temperature) = request.temperature {
            body.insert("temperature".to_string(), json!(temperature));
        }

        Value::Object(body)
    }

    fn translate_response(&self, response: Value) -> Result<ChatCompletionResponse, TranslationError> {
        let parsed: AnthropicResponse = serde_json::from_value(response)?;

        if parsed.content.is_empty() {
            return Err(TranslationError::MissingRequiredField("content".to_string()));
        }
        let text: Vec<&str> = parsed
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .filter_map(|block| block.text.as_deref())
            .collect();

        let finish_reason = parsed
            .stop_reason
            .as_deref()
            .map(|reason| self.translate_stop_reason(reason));

        Ok(ChatCompletionResponse {
            id: parsed.id,
            object: CHAT_COMPLETION_OBJECT.to_string(),
            created: chrono::Utc::now().timestamp(),
            model: parsed.model,
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage::assistant(text.join("")),
                finish_reason,
            }],
            usage: parsed
                .usage
                .map(|usage| Usage::new(usage.input_tokens, usage.output_tokens)),
        })
    }

    fn translate_stop_reason(&self, reason: &str) -> String {
        // Anthropic uses: end_turn, max_tokens, stop_sequence, tool_use
        match reason {
            "end_turn" => "stop".to_string(),
            "max_tokens" => "length".to_string(),
            "stop_sequence" => "stop".to_string(),
            "tool_use" => "tool_calls".to_string(),
            _ => "stop".to_string(),
        }
    }
}
