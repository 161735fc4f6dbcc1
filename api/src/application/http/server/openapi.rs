use utoipa::OpenApi;

use crate::application::http::{health::HealthApiDoc, session::router::SessionApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "letAIcook API",
        description = "Upload a photo of your fridge, get a dish suggestion with its recipe."
    ),
    nest(
        (path = "/sessions", api = SessionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
