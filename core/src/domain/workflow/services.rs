use std::{future::Future, time::Duration};

use chrono::{TimeDelta, Utc};
use tokio::sync::OwnedMutexGuard;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    workflow::{
        entities::{Collaborator, FailureKind, Session},
        errors::WorkflowError,
        machine::transition,
        ports::{
            DishImageLookup, IngredientExtractor, RecipeSuggester, SessionRepository,
            WorkflowService,
        },
        preferences::PreferencesForm,
        value_objects::{
            CollaboratorFailure, Command, Event, FridgeImage, Step, Suggestion, SuggestionRequest,
        },
    },
};

impl<S, E, R, I> Service<S, E, R, I>
where
    S: SessionRepository,
    E: IngredientExtractor,
    R: RecipeSuggester,
    I: DishImageLookup,
{
    async fn load(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    /// Takes the session lock, then loads. Unknown ids leave no lock behind.
    async fn lock_and_load(
        &self,
        session_id: Uuid,
    ) -> Result<(OwnedMutexGuard<()>, Session), CoreError> {
        let guard = self.session_locks.acquire(session_id).await;

        match self.load(session_id).await {
            Ok(session) => Ok((guard, session)),
            Err(e) => {
                drop(guard);
                if e == CoreError::NotFound {
                    self.session_locks.forget(session_id);
                }
                Err(e)
            }
        }
    }

    /// Runs `command` and turns its outcome into the completion event.
    async fn execute(&self, command: Command) -> Event {
        let outcome = match command {
            Command::ExtractIngredients(image) => self
                .extract_ingredients(image)
                .await
                .map(Event::IngredientsExtracted),
            Command::SuggestRecipe(request) => self
                .suggest(request)
                .await
                .map(Event::SuggestionReady),
        };

        outcome.unwrap_or_else(Event::CollaboratorFailed)
    }

    async fn extract_ingredients(&self, image: FridgeImage) -> Result<String, CollaboratorFailure> {
        let ingredients = guarded(
            Collaborator::IngredientExtractor,
            self.timeouts.vision,
            self.ingredient_extractor.extract(image),
        )
        .await?;

        require_text(Collaborator::IngredientExtractor, ingredients)
    }

    /// Dish, then recipe, then illustration. The recipe is never requested
    /// without a dish name.
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, CollaboratorFailure> {
        let SuggestionRequest {
            ingredients,
            preferences_summary,
        } = request;

        let dish = guarded(
            Collaborator::RecipeSuggester,
            self.timeouts.suggestion,
            self.recipe_suggester
                .suggest_dish(ingredients.clone(), preferences_summary.clone()),
        )
        .await?;
        let dish = require_text(Collaborator::RecipeSuggester, dish)?;

        let recipe = guarded(
            Collaborator::RecipeSuggester,
            self.timeouts.suggestion,
            self.recipe_suggester
                .suggest_recipe(ingredients, preferences_summary, dish.clone()),
        )
        .await?;
        let recipe = require_text(Collaborator::RecipeSuggester, recipe)?;

        let dish_image_ref = guarded(
            Collaborator::ImageLookup,
            self.timeouts.image_lookup,
            self.image_lookup.find_image(dish.clone()),
        )
        .await?;

        if dish_image_ref.is_none() {
            info!(dish = %dish, "no illustration found for suggested dish");
        }

        Ok(Suggestion {
            dish,
            recipe,
            dish_image_ref,
        })
    }
}

impl<S, E, R, I> WorkflowService for Service<S, E, R, I>
where
    S: SessionRepository,
    E: IngredientExtractor,
    R: RecipeSuggester,
    I: DishImageLookup,
{
    async fn create_session(&self) -> Result<Session, CoreError> {
        let session = self.session_repository.create(Session::new()).await?;
        info!(session_id = %session.id, "session created");

        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.load(session_id).await
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        let (_guard, _) = self.lock_and_load(session_id).await?;
        self.session_repository.delete(session_id).await?;
        self.session_locks.forget(session_id);

        Ok(())
    }

    #[instrument(skip(self, event), fields(event = event.name()))]
    async fn dispatch(&self, session_id: Uuid, event: Event) -> Result<Session, CoreError> {
        let (_guard, session) = self.lock_and_load(session_id).await?;
        let from = session.stage;

        let Step { session, command } = transition(session, event).inspect_err(|e| {
            warn!(stage = %from, "transition rejected: {}", e);
        })?;

        let session = match command {
            Some(command) => {
                let completion = self.execute(command).await;
                transition(session, completion)?.session
            }
            None => session,
        };

        let session = self.session_repository.save(session.touch()).await?;
        info!(from = %from, to = %session.stage, "session advanced");

        match &session.last_error {
            Some(failure) => {
                warn!(
                    collaborator = %failure.collaborator,
                    kind = %failure.kind,
                    "stage failed: {}",
                    failure.message
                );
                Err(CoreError::Workflow(WorkflowError::Collaborator {
                    collaborator: failure.collaborator,
                    kind: failure.kind,
                    message: failure.message.clone(),
                }))
            }
            None => Ok(session),
        }
    }

    async fn start(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::Start).await
    }

    async fn upload_image(
        &self,
        session_id: Uuid,
        image: Option<FridgeImage>,
    ) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::SubmitUpload { image })
            .await
    }

    async fn submit_preferences(
        &self,
        session_id: Uuid,
        form: PreferencesForm,
    ) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::SubmitPreferences(form))
            .await
    }

    async fn get_another(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::GetAnother).await
    }

    async fn change_preferences(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::ChangePreferences).await
    }

    async fn go_home(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::GoHome).await
    }

    async fn retry(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.dispatch(session_id, Event::Retry).await
    }

    async fn evict_idle_sessions(&self, max_idle: Duration) -> Result<usize, CoreError> {
        let Some(cutoff) = TimeDelta::from_std(max_idle)
            .ok()
            .and_then(|idle| Utc::now().checked_sub_signed(idle))
        else {
            return Ok(0);
        };

        let evicted = self.session_repository.evict_idle(cutoff).await?;
        for session_id in &evicted {
            self.session_locks.forget(*session_id);
        }

        if !evicted.is_empty() {
            info!(count = evicted.len(), "evicted idle sessions");
        }

        Ok(evicted.len())
    }
}

/// Bounds `call` by `limit`; dropping the timed out future cancels it.
async fn guarded<T, F>(
    collaborator: Collaborator,
    limit: Duration,
    call: F,
) -> Result<T, CollaboratorFailure>
where
    F: Future<Output = Result<T, CoreError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(CoreError::MalformedResponse(message))) => Err(CollaboratorFailure::new(
            collaborator,
            FailureKind::Malformed,
            message,
        )),
        Ok(Err(e)) => Err(CollaboratorFailure::new(
            collaborator,
            FailureKind::Failed,
            e.to_string(),
        )),
        Err(_) => Err(CollaboratorFailure::new(
            collaborator,
            FailureKind::TimedOut,
            format!("no response after {:?}", limit),
        )),
    }
}

fn require_text(collaborator: Collaborator, text: String) -> Result<String, CollaboratorFailure> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CollaboratorFailure::new(
            collaborator,
            FailureKind::Malformed,
            "empty response",
        ));
    }

    Ok(text.to_string())
}
