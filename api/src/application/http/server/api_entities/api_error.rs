use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use letaicook_core::domain::{common::entities::app_errors::CoreError, workflow::WorkflowError};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Conflict(_) => "E_INVALID_TRANSITION",
            ApiError::PayloadTooLarge(_) => "E_PAYLOAD_TOO_LARGE",
            ApiError::ValidationError(_) => "E_VALIDATION",
            ApiError::BadGateway(_) => "E_COLLABORATOR_FAILURE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Session not found".to_string()),
            CoreError::Workflow(workflow) => match workflow {
                WorkflowError::InputMissing(_)
                | WorkflowError::InvalidPreferences(_)
                | WorkflowError::InvalidImage(_) => ApiError::BadRequest(workflow.to_string()),
                WorkflowError::InvalidTransition { .. } => ApiError::Conflict(workflow.to_string()),
                WorkflowError::Collaborator { .. } => ApiError::BadGateway(workflow.to_string()),
            },
            CoreError::ExternalServiceError(_) | CoreError::MalformedResponse(_) => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::InternalServerError(_) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use letaicook_core::domain::workflow::{Collaborator, FailureKind, Stage};

    use super::*;

    #[test]
    fn workflow_errors_map_to_statuses() {
        let cases = [
            (
                CoreError::Workflow(WorkflowError::InputMissing("fridge image")),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::Workflow(WorkflowError::InvalidTransition {
                    stage: Stage::Home,
                    event: "retry",
                }),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Workflow(WorkflowError::InvalidPreferences("calories".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::Workflow(WorkflowError::Collaborator {
                    collaborator: Collaborator::RecipeSuggester,
                    kind: FailureKind::TimedOut,
                    message: "elapsed".to_string(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::InternalServerError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }
}
