use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The upload was not a well-formed `data:<mime>;base64,<payload>` URI.
    #[error("Malformed data URI: {0}")]
    MalformedDataUri(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The declared format was recognised but the payload could not be read.
    #[error("Could not extract document text: {0}")]
    Extraction(String),
}
