//! Prefix-based model routing
//!
//! Resolves `<prefix>/<model>` identifiers to a registered provider adapter
//! and aggregates model listings and provider status across the registry.

pub mod registry;

use std::sync::Arc;

use tracing::{debug, info, Instrument};

use crate::context::CallContext;
use crate::providers::{ProviderAdapter, ProviderError, ProviderResult};
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ProviderInfo};

pub use registry::{ProviderRegistry, RegistryError};

/// Routes chat completions to provider adapters by model prefix
///
/// Holds the registry read-only; cloning is cheap and safe to share across
/// request handlers.
#[derive(Clone)]
pub struct ModelRouter {
    registry: Arc<ProviderRegistry>,
}

impl ModelRouter {
    /// Create a new model router
    pub fn new(registry: ProviderRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Access the underlying registry
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve a model identifier to its adapter
    ///
    /// Only the segment before the first `/` is considered, matched exactly.
    ///
    /// # Errors
    /// * `ModelNotFound` - no `/` in `model`, or the prefix is not registered
    /// * `ProviderNotConfigured` - the matched adapter has no credentials
    pub fn resolve(&self, model: &str) -> ProviderResult<&Arc<dyn ProviderAdapter>> {
        let (prefix, _) = model
            .split_once('/')
            .ok_or_else(|| ProviderError::ModelNotFound(model.to_string()))?;

        let adapter = self
            .registry
            .get(prefix)
            .ok_or_else(|| ProviderError::ModelNotFound(model.to_string()))?;

        if !adapter.is_configured() {
            return Err(ProviderError::ProviderNotConfigured(format!(
                "Provider '{}' is not configured",
                prefix
            )));
        }

        Ok(adapter)
    }

    /// Route a chat completion to the adapter named by the model prefix
    ///
    /// The adapter receives the request with its model rewritten to the
    /// unprefixed form. Adapter failures are returned unchanged.
    pub async fn route_chat_completion(
        &self,
        request: &ChatCompletionRequest,
        ctx: &CallContext,
    ) -> ProviderResult<ChatCompletionResponse> {
        let adapter = self.resolve(&request.model).map_err(|e| {
            ctx.log_rejected(&e.to_string());
            e
        })?;

        let model = adapter.strip_prefix(&request.model);
        ctx.log_routed(adapter.prefix(), model);

        let unprefixed = request.with_model(model);
        adapter
            .create_chat_completion(&unprefixed, ctx)
            .instrument(ctx.span())
            .await
    }

    /// Models of every configured provider, prefixed, paired with the
    /// provider name in registration order
    ///
    /// Unconfigured providers contribute no entry at all.
    pub fn list_all_models(&self, ctx: &CallContext) -> Vec<(String, Vec<String>)> {
        let models: Vec<(String, Vec<String>)> = self
            .registry
            .iter()
            .filter(|adapter| adapter.is_configured())
            .map(|adapter| {
                let prefixed = adapter
                    .list_models()
                    .into_iter()
                    .map(|model| format!("{}/{}", adapter.prefix(), model))
                    .collect();
                (adapter.provider_name().to_string(), prefixed)
            })
            .collect();

        debug!(
            request_id = %ctx.request_id,
            providers = models.len(),
            "Listed available models"
        );

        models
    }

    /// One status entry per registered provider, configured or not
    pub fn provider_status(&self, ctx: &CallContext) -> Vec<ProviderInfo> {
        let status: Vec<ProviderInfo> = self
            .registry
            .iter()
            .map(|adapter| ProviderInfo {
                name: adapter.provider_name().to_string(),
                prefix: adapter.prefix().to_string(),
                configured: adapter.is_configured(),
                available_models: adapter.list_models(),
            })
            .collect();

        info!(
            request_id = %ctx.request_id,
            providers = status.len(),
            configured = status.iter().filter(|p| p.configured).count(),
            "Reported provider status"
        );

        status
    }
}
