//! Per-request call context
//!
//! A `CallContext` is created by the auth middleware for every inbound
//! request and passed explicitly through the routing core, so log lines from
//! the router and the adapters can be correlated by request id.

use std::time::Instant;

use tracing::{error, info, warn, Span};
use uuid::Uuid;

/// Context for one request through the gateway
#[derive(Debug, Clone)]
pub struct CallContext {
    /// Identifier used for log correlation
    pub request_id: String,
    /// Authenticated principal, if the credential store knows one
    pub user_id: Option<String>,
    /// When the request started
    pub start_time: Instant,
}

impl CallContext {
    /// Create a context with a fresh request id
    pub fn new() -> Self {
        Self::with_request_id(Uuid::new_v4().to_string())
    }

    /// Create a context with a caller-supplied request id
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            user_id: None,
            start_time: Instant::now(),
        }
    }

    /// Set the authenticated user
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log a request being routed to a provider
    pub fn log_routed(&self, provider: &str, model: &str) {
        info!(
            request_id = %self.request_id,
            user_id = ?self.user_id,
            provider = %provider,
            model = %model,
            "Routing chat completion"
        );
    }

    /// Log a completed upstream call
    pub fn log_upstream_complete(&self, provider: &str, status: u16) {
        info!(
            request_id = %self.request_id,
            provider = %provider,
            status = %status,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from upstream"
        );
    }

    /// Log a rejected request (client-side problem)
    pub fn log_rejected(&self, reason: &str) {
        warn!(
            request_id = %self.request_id,
            user_id = ?self.user_id,
            elapsed_ms = %self.elapsed_ms(),
            reason = %reason,
            "Request rejected"
        );
    }

    /// Log an upstream failure
    pub fn log_upstream_error(&self, provider: &str, error: &str) {
        error!(
            request_id = %self.request_id,
            provider = %provider,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Upstream call failed"
        );
    }

    /// Create a tracing span for this request
    pub fn span(&self) -> Span {
        tracing::info_span!(
            "gateway_request",
            request_id = %self.request_id,
            user_id = ?self.user_id,
        )
    }
}

impl Default for CallContext {
    fn default() -> Self {
        Self::new()
    }
}
