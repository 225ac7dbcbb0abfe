//! Deterministic model stubs for tests. The flows only see the
//! [`LanguageModel`](crate::provider::LanguageModel) port, so swapping the
//! real client for one of these exercises every layer above the provider.

use anyhow::Result;
use async_trait::async_trait;

use crate::provider::LanguageModel;

/// Always responds with the same canned text.
pub struct StubModel {
    response: String,
}

impl StubModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn invoke(&self, _prompt: &str) -> Result<String> {
        Ok(self.response.clone())
    }
}

/// Always fails, simulating a provider fault.
pub struct FailingModel;

#[async_trait]
impl LanguageModel for FailingModel {
    async fn invoke(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("provider unavailable")
    }
}

/// Hands out one queued response per call, in order; fails once the queue
/// runs dry. Useful when a test drives several different flows through the
/// same model handle.
pub struct SequenceModel {
    responses: std::sync::Mutex<std::collections::VecDeque<String>>,
}

impl SequenceModel {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: std::sync::Mutex::new(
                responses.into_iter().map(Into::into).collect(),
            ),
        }
    }
}

#[async_trait]
impl LanguageModel for SequenceModel {
    async fn invoke(&self, _prompt: &str) -> Result<String> {
        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        responses
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no queued responses left"))
    }
}
