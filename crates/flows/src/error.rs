use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    /// The flow input failed validation before any model call was made.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    /// The provider call itself failed (network fault, non-2xx status).
    #[error("Model call failed: {0}")]
    Provider(anyhow::Error),

    #[error("Model returned an empty response for {flow}")]
    EmptyResponse { flow: &'static str },

    /// The model responded, but the response did not parse against the
    /// declared output schema. Never downgraded to a partial result.
    #[error("Model output did not match the {flow} schema: {source}")]
    SchemaMismatch {
        flow: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FlowError {
    pub fn invalid_input(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidInput { field, reason }
    }
}
