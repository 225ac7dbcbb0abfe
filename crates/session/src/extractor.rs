use async_trait::async_trait;
use extract::ExtractError;

/// Port for turning an uploaded data URI into plain text, so tests can stub
/// extraction the same way they stub the model.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, file_data_uri: &str) -> Result<String, ExtractError>;
}

/// Adapter over the extract crate. PDF/DOCX parsing is CPU-bound, so it runs
/// on the blocking pool rather than stalling the async runtime.
pub struct DocumentExtractor;

#[async_trait]
impl Extractor for DocumentExtractor {
    async fn extract(&self, file_data_uri: &str) -> Result<String, ExtractError> {
        let uri = file_data_uri.to_string();
        tokio::task::spawn_blocking(move || extract::extract_text(&uri))
            .await
            .map_err(|e| ExtractError::Extraction(format!("extraction task failed: {e}")))?
    }
}
