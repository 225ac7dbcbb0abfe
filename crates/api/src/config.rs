use flows::RetryPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// Bearer token for hosted gateways; read from the environment and
    /// consumed only by the model-invocation layer.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: "0.0.0.0:3000".to_string(),
            },
            provider: ProviderConfig {
                base_url: "http://localhost:11434".to_string(),
                model: "llama3".to_string(),
                api_key: None,
            },
            // One attempt, as the flows originally behaved.
            retry: RetryConfig {
                max_retries: 0,
                initial_backoff_ms: 1000,
                max_backoff_ms: 10_000,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("CLAUSELENS_ADDR") {
            config.server.bind_addr = addr;
        }
        if let Ok(url) = std::env::var("MODEL_BASE_URL") {
            config.provider.base_url = url;
        }
        if let Ok(model) = std::env::var("MODEL_NAME") {
            config.provider.model = model;
        }
        if let Ok(key) = std::env::var("MODEL_API_KEY") {
            config.provider.api_key = Some(key);
        }
        if let Ok(retries) = std::env::var("MODEL_MAX_RETRIES") {
            if let Ok(n) = retries.parse() {
                config.retry.max_retries = n;
            }
        }

        config
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_retries,
            self.retry.initial_backoff_ms,
            self.retry.max_backoff_ms,
        )
    }
}
