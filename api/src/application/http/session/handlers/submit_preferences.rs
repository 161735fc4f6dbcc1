use axum::extract::{Path, State};
use letaicook_core::domain::workflow::{PreferencesForm, ports::WorkflowService};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    session::{handlers::SessionResponse, validators::SubmitPreferencesValidator},
};

#[utoipa::path(
    post,
    path = "/{session_id}/preferences",
    tag = "session",
    summary = "Submit preferences",
    description = "Stores the preferences, appends the optional addendum to the ingredients and runs the suggestion. Answers once the results stage is reached.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = SubmitPreferencesValidator,
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Invalid preferences"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Not allowed in the current stage"),
        (status = 502, description = "A collaborator failed; the session keeps the error and can be retried")
    )
)]
pub async fn submit_preferences(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitPreferencesValidator>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .submit_preferences(session_id, PreferencesForm::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse::from(session)))
}
