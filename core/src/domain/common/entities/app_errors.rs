use thiserror::Error;

use crate::domain::workflow::errors::WorkflowError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
