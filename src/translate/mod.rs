//! Translation layer between the gateway format and provider wire formats
//!
//! This module provides the `MessageTranslator` trait and implementations for
//! translating chat completion requests/responses between the gateway's
//! OpenAI-compatible types and provider-specific JSON (OpenAI, Anthropic).

pub mod anthropic;
pub mod openai;

use thiserror::Error;

use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Errors that can occur while reading a provider response
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A required field is missing from the provider response
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// JSON deserialization error
    #[error("Malformed provider response: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Trait for translating between the gateway format and a provider format
///
/// Building a provider request cannot fail: request validation happens at the
/// HTTP boundary. Reading a provider response can, when the upstream returns
/// something that is not a completion.
pub trait MessageTranslator {
    /// Translate a gateway request (model already unprefixed) to provider JSON
    fn translate_request(&self, request: &ChatCompletionRequest) -> serde_json::Value;

    /// Translate provider response JSON to the gateway response
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` if required fields are missing or have the
    /// wrong type.
    fn translate_response(
        &self,
        response: serde_json::Value,
    ) -> Result<ChatCompletionResponse, TranslationError>;

    /// Map a provider stop reason to the OpenAI vocabulary
    fn translate_stop_reason(&self, reason: &str) -> String;
}

pub use anthropic::AnthropicTranslator;
pub use openai::OpenAITranslator;
