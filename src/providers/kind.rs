//! Supported upstream providers
//!
//! Static facts about each provider: routing prefix, display name, default
//! endpoint and model catalog.

use std::fmt;

/// Upstream AI providers known to the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAI,
    Anthropic,
    Groq,
    DeepSeek,
}

impl ProviderKind {
    /// All providers, in registration order
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::Groq,
        ProviderKind::DeepSeek,
    ];

    /// Routing prefix used in model identifiers
    pub fn prefix(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Groq => "groq",
            ProviderKind::DeepSeek => "deepseek",
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Groq => "Groq",
            ProviderKind::DeepSeek => "DeepSeek",
        }
    }

    /// Default API base URL
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "https://api.openai.com/v1",
            ProviderKind::Anthropic => "https://api.anthropic.com/v1",
            ProviderKind::Groq => "https://api.groq.com/openai/v1",
            ProviderKind::DeepSeek => "https://api.deepseek.com/v1",
        }
    }

    /// Unprefixed model identifiers served by this provider
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            ProviderKind::OpenAI => &[
                "gpt-3.5-turbo",
                "gpt-4",
                "gpt-4-turbo",
                "gpt-4o",
                "gpt-4o-mini",
            ],
            ProviderKind::Anthropic => &[
                "claude-3-5-sonnet-20241022",
                "claude-3-5-haiku-20241022",
                "claude-3-opus-20240229",
            ],
            ProviderKind::Groq => &[
                "llama-3.1-405b-reasoning",
                "llama-3.1-70b-versatile",
                "llama-3.1-8b-instant",
                "mixtral-8x7b-32768",
            ],
            ProviderKind::DeepSeek => &["deepseek-chat", "deepseek-coder"],
        }
    }

    /// Whether the adapter rejects models outside its catalog before calling
    /// upstream. The others leave that decision to the provider API.
    pub fn enforces_model_list(&self) -> bool {
        matches!(self, ProviderKind::OpenAI)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}
