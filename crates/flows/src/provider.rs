use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port to the external language model: one rendered prompt in, the raw
/// response text out. Concrete clients live behind this trait so tests can
/// substitute a deterministic stub.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String>;
}

/// Ollama-compatible client. Also works against hosted gateways that speak
/// the same generate API; those take a bearer token.
#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    format: String, // "json" for structured output
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            model,
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            format: "json".to_string(),
        };

        let mut builder = self.client.post(&url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .context("Failed to send request to model provider")?;

        if !response.status().is_success() {
            anyhow::bail!("Model request failed: {}", response.status());
        }

        let body: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse model provider response")?;

        Ok(body.response)
    }
}
