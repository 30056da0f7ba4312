//! Provider adapter abstraction layer
//!
//! Defines the `ProviderAdapter` trait implemented once per upstream AI
//! provider, plus deterministic mock adapters for tests and local runs.
//!
//! # Security
//!
//! Implementations MUST:
//! - Never forward client Authorization headers to upstream providers
//! - Use provider-specific API keys supplied at construction
//! - Report failures as `ProviderError`, never as client library errors

pub mod anthropic;
pub mod client;
pub mod error;
pub mod headers;
pub mod kind;
pub mod mock;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::context::CallContext;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

pub use anthropic::AnthropicAdapter;
pub use error::{ProviderError, ProviderResult};
pub use kind::ProviderKind;
pub use mock::MockAdapter;
pub use openai::OpenAICompatibleAdapter;

/// Real adapters for every known provider, in registration order
///
/// Providers without a key are still registered so they show up in status
/// reports; routing to them fails with `ProviderNotConfigured`.
pub fn adapters_from_config(
    config: &Config,
    client: &reqwest::Client,
) -> Vec<Arc<dyn ProviderAdapter>> {
    ProviderKind::ALL
        .into_iter()
        .map(|kind| {
            let settings = config.provider(kind);
            let adapter: Arc<dyn ProviderAdapter> = match kind {
                ProviderKind::Anthropic => Arc::new(AnthropicAdapter::new(
                    client.clone(),
                    settings.api_url.clone(),
                    settings.api_key.clone(),
                )),
                _ => Arc::new(OpenAICompatibleAdapter::new(
                    kind,
                    client.clone(),
                    settings.api_url.clone(),
                    settings.api_key.clone(),
                )),
            };
            adapter
        })
        .collect()
}

/// Mock adapters for every known provider
pub fn mock_adapters() -> Vec<Arc<dyn ProviderAdapter>> {
    MockAdapter::all()
        .into_iter()
        .map(|adapter| Arc::new(adapter) as Arc<dyn ProviderAdapter>)
        .collect()
}

/// Trait defining the interface for AI provider adapters
///
/// Adapters are shared across concurrent requests behind an `Arc`, so they
/// hold only immutable state: credentials, a pooled HTTP client, a catalog.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Human-readable provider label
    fn provider_name(&self) -> &str;

    /// Routing key used before the first `/` in model identifiers
    fn prefix(&self) -> &str;

    /// Whether the adapter holds credentials. Cheap and side-effect free.
    fn is_configured(&self) -> bool;

    /// Unprefixed model identifiers served by this provider, in stable order
    fn list_models(&self) -> Vec<String>;

    /// Run a chat completion upstream
    ///
    /// The request model may be prefixed or bare; adapters strip their own
    /// prefix before calling the provider.
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
        ctx: &CallContext,
    ) -> ProviderResult<ChatCompletionResponse>;

    /// Remove `"<prefix>/"` from the front of `full_model`, if present
    fn strip_prefix<'a>(&self, full_model: &'a str) -> &'a str {
        full_model
            .strip_prefix(self.prefix())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(full_model)
    }
}
