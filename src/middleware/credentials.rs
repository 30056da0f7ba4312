//! Gateway credential stores
//!
//! The auth middleware asks an injected `CredentialStore` whether a bearer
//! token is acceptable. Stores never see the raw token after construction;
//! lookups go through its SHA-256 digest.

use std::collections::HashMap;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// Identity attached to an accepted token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
}

impl Principal {
    /// Principal for stores that do not distinguish callers
    pub fn anonymous() -> Self {
        Self {
            user_id: "anonymous".to_string(),
        }
    }
}

/// Capability that decides whether a bearer token is accepted
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Return the principal for `token`, or `None` if it is rejected
    async fn authenticate(&self, token: &str) -> Option<Principal>;
}

/// Hash a token for lookup and logging
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Accepts any non-empty bearer token
#[derive(Debug, Clone, Default)]
pub struct AllowAnyBearer;

#[async_trait]
impl CredentialStore for AllowAnyBearer {
    async fn authenticate(&self, token: &str) -> Option<Principal> {
        (!token.trim().is_empty()).then(Principal::anonymous)
    }
}

/// Fixed token table loaded at start-up
#[derive(Debug, Clone, Default)]
pub struct StaticTokenStore {
    by_hash: HashMap<String, Principal>,
}

impl StaticTokenStore {
    pub fn new<I, T, U>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: AsRef<str>,
        U: Into<String>,
    {
        let by_hash = tokens
            .into_iter()
            .map(|(token, user_id)| {
                (
                    hash_token(token.as_ref()),
                    Principal {
                        user_id: user_id.into(),
                    },
                )
            })
            .collect();

        Self { by_hash }
    }

    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

#[async_trait]
impl CredentialStore for StaticTokenStore {
    async fn authenticate(&self, token: &str) -> Option<Principal> {
        self.by_hash.get(&hash_token(token)).cloned()
    }
}
