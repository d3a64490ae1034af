//! Hugging Face Inference API provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::{CompletionProvider, ProviderError, Result};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct InferenceOutput {
    generated_text: Option<String>,
}

impl HuggingFaceProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = InferenceRequest { inputs: prompt };

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "Hugging Face request failed with status {status}: {body}"
            )));
        }

        let outputs: Vec<InferenceOutput> = response.json().await?;
        outputs
            .into_iter()
            .find_map(|output| output.generated_text)
            .ok_or_else(|| {
                ProviderError::Api("Hugging Face response contained no generated text".to_string())
            })
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
