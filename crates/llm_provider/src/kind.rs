//! Supported provider identifiers and their per-provider defaults.

use std::fmt;
use std::str::FromStr;

use crate::provider::ProviderError;

/// All provider kinds the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    GoogleAi,
    Cohere,
    HuggingFace,
}

pub const ALL_PROVIDERS: &[ProviderKind] = &[
    ProviderKind::OpenAi,
    ProviderKind::Anthropic,
    ProviderKind::GoogleAi,
    ProviderKind::Cohere,
    ProviderKind::HuggingFace,
];

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::GoogleAi => "googleai",
            ProviderKind::Cohere => "cohere",
            ProviderKind::HuggingFace => "huggingface",
        }
    }

    /// Environment variable holding the API key for this provider.
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::GoogleAi => "GOOGLEAI_API_KEY",
            ProviderKind::Cohere => "COHERE_API_KEY",
            ProviderKind::HuggingFace => "HUGGINGFACEHUB_API_TOKEN",
        }
    }

    /// Optional environment variable overriding the provider base URL.
    /// Used for local gateways and for pointing tests at a mock server.
    pub fn base_url_env_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_BASE_URL",
            ProviderKind::Anthropic => "ANTHROPIC_BASE_URL",
            ProviderKind::GoogleAi => "GOOGLEAI_BASE_URL",
            ProviderKind::Cohere => "COHERE_BASE_URL",
            ProviderKind::HuggingFace => "HUGGINGFACE_BASE_URL",
        }
    }

    /// Model used when a request does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-5-haiku-latest",
            ProviderKind::GoogleAi => "gemini-1.5-flash",
            ProviderKind::Cohere => "command-r",
            ProviderKind::HuggingFace => "mistralai/Mistral-7B-Instruct-v0.2",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROVIDERS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ProviderError::UnsupportedProvider {
                requested: s.to_string(),
                supported: supported_providers(),
            })
    }
}

/// Comma-separated list of supported provider names, for error messages.
pub fn supported_providers() -> String {
    ALL_PROVIDERS
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
