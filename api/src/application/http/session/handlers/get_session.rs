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
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get session",
    description = "Returns the session and the view of its current stage. A failed collaborator call is visible here as `last_error`.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse::from(session)))
}
