//! Common test utilities for the gateway
//!
//! Shared fixtures for the integration tests: configuration, provider
//! registries built from mock adapters, and a test server wired the same way
//! as production.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum_test::TestServer;
use model_router::{
    providers::{MockAdapter, OpenAICompatibleAdapter, ProviderAdapter, ProviderKind},
    routes::create_router,
    AppState, Config, CredentialStore, ProviderRegistry, StaticTokenStore,
};

/// Test configuration constants
pub mod constants {
    /// Gateway token accepted by the test credential store
    pub const TEST_API_TOKEN: &str = "test-gateway-token";
    /// User the test token belongs to
    pub const TEST_USER_ID: &str = "user_123";
    /// Upstream key handed to adapters that talk to wiremock
    pub const TEST_OPENAI_API_KEY: &str = "test-openai-api-key";
}

/// Authorization header value for the test token
pub fn auth_header() -> String {
    format!("Bearer {}", constants::TEST_API_TOKEN)
}

/// Configuration in testing mode with extra variables applied
pub fn test_config(vars: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.entry("TESTING".to_string())
        .or_insert_with(|| "true".to_string());

    Config::from_lookup(|key| vars.get(key).cloned()).expect("Failed to build test config")
}

/// Registry from a list of adapters
pub fn registry(adapters: Vec<Arc<dyn ProviderAdapter>>) -> ProviderRegistry {
    ProviderRegistry::new(adapters).expect("Failed to build registry")
}

/// OpenAI and Anthropic configured, Groq and DeepSeek without credentials
pub fn mixed_registry() -> ProviderRegistry {
    registry(vec![
        Arc::new(MockAdapter::new(ProviderKind::OpenAI)) as Arc<dyn ProviderAdapter>,
        Arc::new(MockAdapter::new(ProviderKind::Anthropic)),
        Arc::new(MockAdapter::unconfigured(ProviderKind::Groq)),
        Arc::new(MockAdapter::unconfigured(ProviderKind::DeepSeek)),
    ])
}

/// Every provider registered, none configured
pub fn unconfigured_registry() -> ProviderRegistry {
    registry(
        ProviderKind::ALL
            .into_iter()
            .map(|kind| Arc::new(MockAdapter::unconfigured(kind)) as Arc<dyn ProviderAdapter>)
            .collect(),
    )
}

/// Registry whose OpenAI adapter calls the given upstream URL
pub fn openai_upstream_registry(upstream_url: &str) -> ProviderRegistry {
    let adapter: Arc<dyn ProviderAdapter> = Arc::new(OpenAICompatibleAdapter::new(
        ProviderKind::OpenAI,
        reqwest::Client::new(),
        upstream_url,
        Some(constants::TEST_OPENAI_API_KEY.to_string()),
    ));
    registry(vec![adapter])
}

/// Credential store accepting only the test token
pub fn test_credentials() -> Arc<dyn CredentialStore> {
    Arc::new(StaticTokenStore::new([(
        constants::TEST_API_TOKEN,
        constants::TEST_USER_ID,
    )]))
}

/// Test server over the full application router
pub fn create_test_server(registry: ProviderRegistry) -> TestServer {
    create_test_server_with(test_config(&[]), registry)
}

/// Test server with an explicit configuration
pub fn create_test_server_with(config: Config, registry: ProviderRegistry) -> TestServer {
    let state = Arc::new(AppState::new_for_testing(
        config,
        registry,
        test_credentials(),
    ));
    TestServer::new(create_router(state)).expect("Failed to create test server")
}
