use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use bytes::Bytes;
use letaicook_core::{
    domain::{
        common::entities::app_errors::CoreError,
        workflow::{entities::Stage, ports::WorkflowService},
    },
    infrastructure::image::normalize_upload,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session::handlers::SessionResponse,
};

pub const IMAGE_FIELD: &str = "image";

#[utoipa::path(
    post,
    path = "/{session_id}/upload",
    tag = "session",
    summary = "Upload fridge photo",
    description = "Multipart form with one `image` field (PNG, JPEG, WebP or GIF). The stage is checked before the photo is decoded; the photo is then converted to JPEG and its ingredients are extracted.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionResponse),
        (status = 400, description = "Missing or unreadable image"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Not allowed in the current stage"),
        (status = 413, description = "Image too large"),
        (status = 502, description = "A collaborator failed; the session keeps the error and can be retried")
    )
)]
pub async fn upload_image(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionResponse>, ApiError> {
    let max_image_bytes = state.args.workflow.max_image_bytes;
    let mut image_data: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        multipart_error(e.status(), e.body_text())
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read image bytes: {}", e);
            multipart_error(e.status(), e.body_text())
        })?;

        if data.len() > max_image_bytes {
            warn!(size = data.len(), "Rejected oversized fridge image");
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_image_bytes
            )));
        }

        if !data.is_empty() {
            image_data = Some(data);
        }
    }

    // outside the upload stage the event is rejected whatever the payload
    let stage = state
        .service
        .get_session(session_id)
        .await
        .map_err(ApiError::from)?
        .stage;

    let image = match image_data {
        Some(data) if stage == Stage::Upload => Some(
            tokio::task::spawn_blocking(move || normalize_upload(&data))
                .await
                .map_err(|e| ApiError::InternalServerError(format!("Image decoding failed: {}", e)))?
                .map_err(|e| ApiError::from(CoreError::from(e)))?,
        ),
        _ => None,
    };

    let session = state
        .service
        .upload_image(session_id, image)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SessionResponse::from(session)))
}

fn multipart_error(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}
