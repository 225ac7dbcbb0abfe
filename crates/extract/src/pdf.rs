use crate::error::ExtractError;

/// Extract text from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Extraction(format!("failed to extract PDF text: {e}")))
}
