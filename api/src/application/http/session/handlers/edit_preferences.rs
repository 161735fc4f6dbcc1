use axum::extract::{Path, State};
use letaicook_core::domain::workflow::ports::WorkflowService;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::SessionResponse,
};

#[utoipa::path(
    post,
    path = "/{session_id}/edit",
    tag = "session",
    summary = "Edit preferences",
    description = "Goes back from the results to the preferences form, keeping the ingredients.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Not allowed in the current stage")
    )
)]
pub async fn edit_preferences(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .change_preferences(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse::from(session)))
}
