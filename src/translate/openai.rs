//! OpenAI translator implementation
//!
//! The gateway format is OpenAI-compatible, so translation is close to a
//! pass-through. Groq and DeepSeek speak the same wire format.

use serde_json::{json, Map, Value};

use super::{MessageTranslator, TranslationError};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// OpenAI chat completions translator
#[derive(Debug, Clone, Default)]
pub struct OpenAITranslator;

impl OpenAITranslator {
    /// Create a new OpenAI translator
    pub fn new() -> Self {
        Self
    }
}

impl MessageTranslator for OpenAITranslator {
    fn translate_request(&self, request: &ChatCompletionRequest) -> Value {
        let mut body = Map::new();
        body.insert("model".to_string(), json!(request.model));
        body.insert("messages".to_string(), json!(request.messages));
        if let Some(temperature) = request.temperature {
            body.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = request.max_tokens {
            body.insert("max_tokens".to_string(), json!(max_tokens));
        }
        // Streaming transport is not served; always ask for a full response
        body.insert("stream".to_string(), json!(false));

        Value::Object(body)
    }

    fn translate_response(&self, response: Value) -> Result<ChatCompletionResponse, TranslationError> {
        let mut parsed: ChatCompletionResponse = serde_json::from_value(response)?;

        for choice in &mut parsed.choices {
            choice.finish_reason = choice
                .finish_reason
                .as_deref()
                .map(|reason| self.translate_stop_reason(reason));
        }

        Ok(parsed)
    }

    fn translate_stop_reason(&self, reason: &str) -> String {
        reason.to_string()
    }
}
