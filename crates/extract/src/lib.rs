pub mod data_uri;
pub mod docx;
pub mod error;
pub mod pdf;

pub use data_uri::DataUri;
pub use error::ExtractError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extract plain text from an uploaded document supplied as a data URI.
///
/// Dispatches on the MIME type declared in the URI header. Only PDF and
/// DOCX uploads are accepted; anything else fails with the offending MIME
/// type in the error.
pub fn extract_text(file_data_uri: &str) -> Result<String, ExtractError> {
    let data = DataUri::parse(file_data_uri)?;

    match data.mime_type.as_str() {
        PDF_MIME => pdf::extract_pdf_text(&data.bytes),
        DOCX_MIME => docx::extract_docx_text(&data.bytes),
        other => Err(ExtractError::UnsupportedFileType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;

    use super::*;

    #[test]
    fn unsupported_mime_type_names_the_offender() {
        let payload = base64::engine::general_purpose::STANDARD.encode(b"\x89PNG");
        let uri = format!("data:image/png;base64,{payload}");

        let err = extract_text(&uri).unwrap_err();
        match err {
            ExtractError::UnsupportedFileType(mime) => assert_eq!(mime, "image/png"),
            other => panic!("expected UnsupportedFileType, got {other:?}"),
        }
    }

    #[test]
    fn malformed_uri_is_rejected_before_dispatch() {
        let err = extract_text("garbage").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }
}
