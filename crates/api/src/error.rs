use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use extract::ExtractError;
use flows::FlowError;
use serde_json::json;
use session::SessionError;

/// User-facing message for provider and schema failures; the distinction is
/// kept in the logs and the typed errors, not in what the end user sees.
pub const MODEL_OVERLOADED: &str =
    "Could not analyze the document. The AI model may be overloaded. Please try again later.";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match &err {
            ExtractError::MalformedDataUri(_) | ExtractError::UnsupportedFileType(_) => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ExtractError::Extraction(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
        }
    }
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match &err {
            FlowError::InvalidInput { .. } => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            FlowError::Provider(_) | FlowError::EmptyResponse { .. }
            | FlowError::SchemaMismatch { .. } => {
                tracing::error!(error = %err, "model flow failed");
                Self::new(StatusCode::BAD_GATEWAY, MODEL_OVERLOADED)
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Busy | SessionError::NoDocument => {
                Self::new(StatusCode::CONFLICT, err.to_string())
            }
            SessionError::Extract(e) => e.into(),
            SessionError::Flow(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_file_type_is_a_bad_request_naming_the_mime() {
        let err: ApiError = ExtractError::UnsupportedFileType("image/png".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("image/png"));
    }

    #[test]
    fn schema_mismatch_maps_to_the_generic_overloaded_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = FlowError::SchemaMismatch {
            flow: "flagRiskyClauses",
            source,
        }
        .into();

        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, MODEL_OVERLOADED);
    }

    #[test]
    fn invalid_input_keeps_its_specific_text() {
        let err: ApiError = FlowError::invalid_input("userQuestion", "must not be empty").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("userQuestion"));
    }

    #[test]
    fn session_guards_map_to_conflict() {
        let err: ApiError = SessionError::NoDocument.into();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err: ApiError = SessionError::Busy.into();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }
}
