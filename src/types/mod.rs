//! Provider-agnostic gateway types
//!
//! These are the shapes the gateway accepts and returns. Every provider
//! adapter translates to and from them, so clients only ever see the
//! OpenAI-compatible format.

pub mod request;
pub mod response;

pub use request::{ChatCompletionRequest, ChatMessage};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, ProviderInfo, Usage};
