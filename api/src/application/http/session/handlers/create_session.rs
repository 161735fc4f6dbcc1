use axum::extract::State;
use letaicook_core::domain::workflow::ports::WorkflowService;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::SessionResponse,
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Create session",
    description = "Opens a new fridge-to-recipe session on the home stage.",
    responses(
        (status = 201, body = SessionResponse)
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let session = state
        .service
        .create_session()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SessionResponse::from(session)))
}
