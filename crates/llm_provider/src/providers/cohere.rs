//! Cohere chat provider (non-streaming).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::{CompletionProvider, ProviderError, Result};

const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

pub struct CohereProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: Option<String>,
}

impl CohereProvider {
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
impl CompletionProvider for CohereProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            message: prompt,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "Cohere request failed with status {status}: {body}"
            )));
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .text
            .ok_or_else(|| ProviderError::Api("Cohere response contained no text".to_string()))
    }

    fn name(&self) -> &str {
        "cohere"
    }
}
