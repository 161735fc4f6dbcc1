use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use letaicook_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub data: ReadinessStatus,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = String)
    )
)]
pub async fn health_live() -> &'static str {
    "OK"
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports whether the session store answers, with the number of live sessions.",
    responses(
        (status = 200, body = ReadinessResponse)
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let data = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(ReadinessResponse { data }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready))
}
