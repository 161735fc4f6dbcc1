use letaicook_core::domain::workflow::{Session, presentation::StageView};
use serde::Serialize;
use utoipa::ToSchema;

pub mod create_session;
pub mod delete_session;
pub mod edit_preferences;
pub mod get_another;
pub mod get_session;
pub mod go_home;
pub mod retry_suggestion;
pub mod start_session;
pub mod submit_preferences;
pub mod upload_image;

/// A session together with what its current stage shows.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionView {
    pub session: Session,
    pub view: StageView,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionResponse {
    pub data: SessionView,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let view = StageView::from(&session);

        Self {
            data: SessionView { session, view },
        }
    }
}
