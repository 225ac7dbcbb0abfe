use base64::Engine;

use crate::error::ExtractError;

/// A parsed `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone)]
pub struct DataUri {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// Parse a data URI, validating each delimiter explicitly so that a
    /// truncated or reordered URI fails as malformed input rather than
    /// falling through to an empty MIME type.
    pub fn parse(uri: &str) -> Result<Self, ExtractError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| ExtractError::MalformedDataUri("missing 'data:' scheme".to_string()))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ExtractError::MalformedDataUri("missing ',' separator".to_string()))?;

        let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
            ExtractError::MalformedDataUri("missing ';base64' marker".to_string())
        })?;

        if mime_type.is_empty() {
            return Err(ExtractError::MalformedDataUri("empty MIME type".to_string()));
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ExtractError::MalformedDataUri(format!("invalid base64 payload: {e}")))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_uri() {
        let uri = DataUri::parse("data:application/pdf;base64,aGVsbG8=").unwrap();
        assert_eq!(uri.mime_type, "application/pdf");
        assert_eq!(uri.bytes, b"hello");
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = DataUri::parse("application/pdf;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }

    #[test]
    fn rejects_missing_comma() {
        let err = DataUri::parse("data:application/pdf;base64").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }

    #[test]
    fn rejects_missing_base64_marker() {
        let err = DataUri::parse("data:application/pdf,aGVsbG8=").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = DataUri::parse("data:application/pdf;base64,???").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }

    #[test]
    fn rejects_empty_mime_type() {
        let err = DataUri::parse("data:;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedDataUri(_)));
    }
}
