//! Configuration management for the gateway
//!
//! Configuration is loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

use crate::providers::ProviderKind;

/// Credentials and endpoint for one upstream provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// API key; `None` leaves the provider unconfigured
    pub api_key: Option<String>,
    /// Base URL of the provider API
    pub api_url: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub groq: ProviderSettings,
    pub deepseek: ProviderSettings,

    /// Timeout applied to each upstream call (in seconds)
    pub upstream_timeout_seconds: u64,

    /// Gateway tokens as `(token, user_id)` pairs. Empty means any bearer
    /// token is accepted.
    pub api_tokens: Vec<(String, String)>,

    /// Serve mock adapters instead of calling real providers
    pub testing: bool,

    /// Key required in `X-Docs-Key` to read the API docs
    pub docs_api_key: Option<String>,

    /// Log output format
    pub log_format: LogFormat,
}

/// Log output format selected by `LOG_FORMAT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format '{}', expected 'pretty' or 'json'", other),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider = |kind: ProviderKind| {
            let prefix = kind.prefix().to_uppercase();
            ProviderSettings {
                api_key: non_empty(&format!("{}_API_KEY", prefix)),
                api_url: non_empty(&format!("{}_API_URL", prefix))
                    .unwrap_or_else(|| kind.default_base_url().to_string()),
            }
        };

        Ok(Self {
            host: non_empty("ROUTER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: non_empty("ROUTER_PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("Invalid ROUTER_PORT")?,

            openai: provider(ProviderKind::OpenAI),
            anthropic: provider(ProviderKind::Anthropic),
            groq: provider(ProviderKind::Groq),
            deepseek: provider(ProviderKind::DeepSeek),

            upstream_timeout_seconds: non_empty("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|| "120".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,

            api_tokens: non_empty("ROUTER_API_TOKENS")
                .map(|raw| parse_api_tokens(&raw))
                .transpose()
                .context("Invalid ROUTER_API_TOKENS")?
                .unwrap_or_default(),

            testing: non_empty("TESTING")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),

            docs_api_key: non_empty("DOCS_API_KEY"),

            log_format: non_empty("LOG_FORMAT")
                .map(|v| v.parse())
                .transpose()
                .context("Invalid LOG_FORMAT")?
                .unwrap_or_default(),
        })
    }

    /// Settings for the given provider
    pub fn provider(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::OpenAI => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::Groq => &self.groq,
            ProviderKind::DeepSeek => &self.deepseek,
        }
    }

    /// Providers that have an API key
    pub fn configured_providers(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.provider(*kind).api_key.is_some())
            .collect()
    }

    /// Check the configuration can serve traffic
    ///
    /// At least one provider key is required unless running in testing mode.
    pub fn validate(&self) -> Result<()> {
        if !self.testing && self.configured_providers().is_empty() {
            bail!(
                "At least one provider API key must be set \
                 (OPENAI_API_KEY, ANTHROPIC_API_KEY, GROQ_API_KEY or DEEPSEEK_API_KEY)"
            );
        }
        Ok(())
    }
}

/// Parse `token:user_id` pairs separated by commas
fn parse_api_tokens(raw: &str) -> Result<Vec<(String, String)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((token, user)) if !token.is_empty() && !user.is_empty() => {
                Ok((token.to_string(), user.to_string()))
            }
            _ => bail!("expected token:user_id, got an entry without a user id"),
        })
        .collect()
}
