use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::create_session::{__path_create_session, create_session};
use super::handlers::delete_session::{__path_delete_session, delete_session};
use super::handlers::edit_preferences::{__path_edit_preferences, edit_preferences};
use super::handlers::get_another::{__path_get_another, get_another};
use super::handlers::get_session::{__path_get_session, get_session};
use super::handlers::go_home::{__path_go_home, go_home};
use super::handlers::retry_suggestion::{__path_retry_suggestion, retry_suggestion};
use super::handlers::start_session::{__path_start_session, start_session};
use super::handlers::submit_preferences::{__path_submit_preferences, submit_preferences};
use super::handlers::upload_image::{__path_upload_image, upload_image};
use crate::{application::http::server::app_state::AppState, args::Args};

/// Room left for multipart boundaries and headers around the image.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    delete_session,
    start_session,
    upload_image,
    submit_preferences,
    get_another,
    edit_preferences,
    go_home,
    retry_suggestion
))]
pub struct SessionApiDoc;

pub fn session_routes(args: &Args) -> Router<AppState> {
    let root_path = &args.server.root_path;
    let body_limit = args
        .workflow
        .max_image_bytes
        .saturating_add(MULTIPART_OVERHEAD);

    Router::new()
        .route(&format!("{}/sessions", root_path), post(create_session))
        .route(
            &format!("{}/sessions/{{session_id}}", root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/start", root_path),
            post(start_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/upload", root_path),
            post(upload_image).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/preferences", root_path),
            post(submit_preferences),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/another", root_path),
            post(get_another),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/edit", root_path),
            post(edit_preferences),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/home", root_path),
            post(go_home),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/retry", root_path),
            post(retry_suggestion),
        )
}
