//! Model Router - OpenAI-compatible gateway for multiple AI providers
//!
//! Routes chat completions to an upstream provider chosen by the prefix of
//! the requested model (`openai/gpt-4o`, `anthropic/claude-3-opus-20240229`).

pub mod config;
pub mod context;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod providers;
pub mod router;
pub mod routes;
pub mod translate;
pub mod types;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

pub use crate::config::Config;
pub use crate::context::CallContext;
pub use crate::middleware::{AllowAnyBearer, CredentialStore, StaticTokenStore};
pub use crate::providers::{ProviderAdapter, ProviderError};
pub use crate::router::{ModelRouter, ProviderRegistry};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    /// Prefix router over the provider registry
    pub router: ModelRouter,
    /// Gateway token check used by the auth middleware
    pub credentials: Arc<dyn CredentialStore>,
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// Registers mock adapters in testing mode, real ones otherwise.
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        let adapters = if config.testing {
            providers::mock_adapters()
        } else {
            providers::adapters_from_config(&config, &http_client)
        };

        let registry = ProviderRegistry::new(adapters).context("Invalid provider registry")?;

        let credentials: Arc<dyn CredentialStore> = if config.api_tokens.is_empty() {
            Arc::new(AllowAnyBearer)
        } else {
            Arc::new(StaticTokenStore::new(config.api_tokens.iter().cloned()))
        };

        info!(
            testing = config.testing,
            providers = registry.len(),
            configured = registry.configured_count(),
            static_tokens = config.api_tokens.len(),
            "Provider registry ready"
        );

        Ok(Self {
            config,
            router: ModelRouter::new(registry),
            credentials,
            start_time: Instant::now(),
        })
    }

    /// Create an application state from explicit parts
    ///
    /// Lets tests inject mock adapters and credential stores directly.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(
        config: Config,
        registry: ProviderRegistry,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            config,
            router: ModelRouter::new(registry),
            credentials,
            start_time: Instant::now(),
        }
    }
}
