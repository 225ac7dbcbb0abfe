use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("An analysis is already in progress")]
    Busy,

    #[error("No analyzed document in this session")]
    NoDocument,

    #[error(transparent)]
    Extract(#[from] extract::ExtractError),

    #[error(transparent)]
    Flow(#[from] flows::FlowError),
}
