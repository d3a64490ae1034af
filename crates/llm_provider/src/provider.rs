use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("API key not found for provider {provider}. Please set environment variable {env_var}")]
    MissingApiKey { provider: String, env_var: String },

    #[error("unsupported provider: {requested}. Supported providers: {supported}")]
    UnsupportedProvider { requested: String, supported: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// A single external text-generation capability.
///
/// Implementations issue one non-streaming completion request and return
/// the generated text. Held behind `Arc<dyn CompletionProvider>` so an
/// agent owns its provider handle without knowing the concrete backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate text for a single prompt.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider identifier (e.g. "openai").
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn CompletionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionProvider")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
