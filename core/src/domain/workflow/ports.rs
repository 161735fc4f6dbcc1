use std::{future::Future, time::Duration};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    workflow::{
        entities::Session,
        preferences::PreferencesForm,
        value_objects::{Event, FridgeImage},
    },
};

/// Vision model turning a fridge photo into an ingredient list
#[cfg_attr(test, mockall::automock)]
pub trait IngredientExtractor: Send + Sync {
    fn extract(
        &self,
        image: FridgeImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Text model proposing a dish and its recipe. Both calls are
/// non-deterministic and never cached.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSuggester: Send + Sync {
    fn suggest_dish(
        &self,
        ingredients: String,
        preferences_summary: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn suggest_recipe(
        &self,
        ingredients: String,
        preferences_summary: String,
        dish_name: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Image search returning an illustration URL. `Ok(None)` means nothing was
/// found and is not an error.
#[cfg_attr(test, mockall::automock)]
pub trait DishImageLookup: Send + Sync {
    fn find_image(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Bytes,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn save(&self, session: Session) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;

    /// Removes every session last updated before `cutoff` and returns their ids.
    fn evict_idle(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Uuid>, CoreError>> + Send;
}

/// Service trait driving the fridge-to-recipe flow
#[cfg_attr(test, mockall::automock)]
pub trait WorkflowService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn delete_session(&self, session_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Reduce `event`, run the collaborator call it asks for and persist the
    /// outcome. A collaborator failure is saved on the session and returned
    /// as [`CoreError::Workflow`].
    fn dispatch(
        &self,
        session_id: Uuid,
        event: Event,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn start(&self, session_id: Uuid) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn upload_image(
        &self,
        session_id: Uuid,
        image: Option<FridgeImage>,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn submit_preferences(
        &self,
        session_id: Uuid,
        form: PreferencesForm,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_another(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn change_preferences(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn go_home(&self, session_id: Uuid)
    -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn retry(&self, session_id: Uuid) -> impl Future<Output = Result<Session, CoreError>> + Send;

    /// Drops sessions idle for longer than `max_idle`, returning how many went.
    fn evict_idle_sessions(
        &self,
        max_idle: Duration,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
