//! Provider registry
//!
//! Immutable prefix → adapter mapping built once at start-up. Registration
//! order is kept so listings come out in a stable order.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::providers::ProviderAdapter;

/// Errors raised while building the registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Provider prefix '{0}' is registered more than once")]
    DuplicatePrefix(String),

    #[error("Provider prefix '{0}' must be non-empty and must not contain '/'")]
    InvalidPrefix(String),
}

/// Immutable mapping from routing prefix to adapter
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    by_prefix: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Build a registry from adapters, in the given order
    ///
    /// Fails if two adapters share a prefix or a prefix could never be
    /// matched (empty, or containing `/`).
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Result<Self, RegistryError> {
        let mut by_prefix = HashMap::with_capacity(adapters.len());

        for (index, adapter) in adapters.iter().enumerate() {
            let prefix = adapter.prefix();
            if prefix.is_empty() || prefix.contains('/') {
                return Err(RegistryError::InvalidPrefix(prefix.to_string()));
            }
            if by_prefix.insert(prefix.to_string(), index).is_some() {
                return Err(RegistryError::DuplicatePrefix(prefix.to_string()));
            }
        }

        Ok(Self {
            adapters,
            by_prefix,
        })
    }

    /// Look up an adapter by exact, case-sensitive prefix
    pub fn get(&self, prefix: &str) -> Option<&Arc<dyn ProviderAdapter>> {
        self.by_prefix.get(prefix).map(|&index| &self.adapters[index])
    }

    /// Iterate adapters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ProviderAdapter>> {
        self.adapters.iter()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Number of adapters holding credentials
    pub fn configured_count(&self) -> usize {
        self.adapters.iter().filter(|a| a.is_configured()).count()
    }
}
