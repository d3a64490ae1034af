//! Provider factory.
//!
//! Creates completion providers from a provider name and optional model,
//! resolving API keys (and optional base-URL overrides) from the
//! environment.

use std::sync::Arc;

use crate::kind::ProviderKind;
use crate::provider::{CompletionProvider, ProviderError, Result};
use crate::providers::{
    AnthropicProvider, CohereProvider, GoogleAiProvider, HuggingFaceProvider, OpenAiProvider,
};

/// Create a provider for `provider`, using `model` or the provider default.
///
/// Fails when the provider name is unknown or its API key environment
/// variable is unset.
pub fn create_provider(provider: &str, model: Option<&str>) -> Result<Arc<dyn CompletionProvider>> {
    let kind: ProviderKind = provider.parse()?;

    let env_var = kind.api_key_env_var();
    let api_key = std::env::var(env_var)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| ProviderError::MissingApiKey {
            provider: kind.to_string(),
            env_var: env_var.to_string(),
        })?;

    let model = model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| kind.default_model())
        .to_string();

    let base_url = std::env::var(kind.base_url_env_var())
        .ok()
        .filter(|url| !url.is_empty());

    tracing::debug!(provider = %kind, model = %model, "creating completion provider");

    let provider: Arc<dyn CompletionProvider> = match kind {
        ProviderKind::OpenAi => {
            let p = OpenAiProvider::new(api_key, model);
            Arc::new(match base_url {
                Some(url) => p.with_base_url(url),
                None => p,
            })
        }
        ProviderKind::Anthropic => {
            let p = AnthropicProvider::new(api_key, model);
            Arc::new(match base_url {
                Some(url) => p.with_base_url(url),
                None => p,
            })
        }
        ProviderKind::GoogleAi => {
            let p = GoogleAiProvider::new(api_key, model);
            Arc::new(match base_url {
                Some(url) => p.with_base_url(url),
                None => p,
            })
        }
        ProviderKind::Cohere => {
            let p = CohereProvider::new(api_key, model);
            Arc::new(match base_url {
                Some(url) => p.with_base_url(url),
                None => p,
            })
        }
        ProviderKind::HuggingFace => {
            let p = HuggingFaceProvider::new(api_key, model);
            Arc::new(match base_url {
                Some(url) => p.with_base_url(url),
                None => p,
            })
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_provider() {
        let err = create_provider("foo", None).unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedProvider { .. }));
        assert!(err.to_string().contains("openai"));
    }

    #[test]
    fn missing_api_key_names_env_var() {
        let err = ProviderError::MissingApiKey {
            provider: "cohere".to_string(),
            env_var: "COHERE_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("COHERE_API_KEY"));
    }
}
