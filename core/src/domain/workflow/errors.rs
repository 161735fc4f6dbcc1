use thiserror::Error;

use crate::domain::workflow::entities::{Collaborator, FailureKind, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Missing input: {0}")]
    InputMissing(&'static str),

    #[error("Event `{event}` is not allowed in stage `{stage}`")]
    InvalidTransition { stage: Stage, event: &'static str },

    #[error("Invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("{collaborator} {kind}: {message}")]
    Collaborator {
        collaborator: Collaborator,
        kind: FailureKind,
        message: String,
    },
}
