//! Routing and provider error taxonomy
//!
//! Every failure in the routing core surfaces as one of these kinds. Provider
//! client errors (`reqwest`, `serde_json`) are flattened to their message at
//! the adapter boundary so no backend-specific type escapes.

use thiserror::Error;

/// Errors produced by the router and provider adapters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// No registered provider matches the model identifier
    #[error("Model {0} not found")]
    ModelNotFound(String),

    /// Provider recognized but it holds no credentials
    #[error("{0}")]
    ProviderNotConfigured(String),

    /// Provider configured but does not serve the requested model
    #[error("{0}")]
    ModelNotSupported(String),

    /// The upstream provider call failed
    #[error("{0}")]
    UpstreamError(String),
}

impl ProviderError {
    /// Error for an adapter that has no API key
    pub fn not_configured(provider: &str) -> Self {
        ProviderError::ProviderNotConfigured(format!("{} API key not configured", provider))
    }

    /// Error for a model missing from a provider's catalog
    pub fn model_not_supported(model: &str, provider: &str) -> Self {
        ProviderError::ModelNotSupported(format!(
            "Model {} not supported by {}",
            model, provider
        ))
    }

    /// Error for a failed upstream call
    pub fn upstream(provider: &str, message: impl std::fmt::Display) -> Self {
        ProviderError::UpstreamError(format!("{} API error: {}", provider, message))
    }
}

/// Result type alias for the routing core
pub type ProviderResult<T> = Result<T, ProviderError>;
