//! Transition function of the fridge-to-recipe flow.
//!
//! `Home -> Upload -> Preferences -> Loading -> Results`, with the user driven
//! back-edges `Results -> Home`, `Results -> Preferences` and
//! `Results -> Loading`. Steps that need a collaborator do not call it here:
//! they return a [`Command`] and stay in place until the matching completion
//! event is reduced. Every function in this module is pure.

use crate::domain::workflow::{
    entities::{Session, Stage, StageFailure},
    errors::WorkflowError,
    value_objects::{CollaboratorFailure, Command, Event, Step, Suggestion, SuggestionRequest},
};

/// Reduce `event` against `session`.
///
/// On error the caller keeps its original session: nothing is applied.
pub fn transition(session: Session, event: Event) -> Result<Step, WorkflowError> {
    let stage = session.stage;

    match (stage, event) {
        (Stage::Home, Event::Start) => Ok(Step::settled(advance(session, Stage::Upload))),

        (Stage::Upload, Event::SubmitUpload { image }) => {
            let image = image.ok_or(WorkflowError::InputMissing("fridge image"))?;
            Ok(Step::with_command(session, Command::ExtractIngredients(image)))
        }
        (Stage::Upload, Event::IngredientsExtracted(ingredients)) => {
            let mut session = advance(session, Stage::Preferences);
            session.ingredients = ingredients;
            Ok(Step::settled(session))
        }

        (Stage::Preferences, Event::SubmitPreferences(form)) => {
            let (preferences, addendum) = form.into_parts()?;
            let mut session = advance(session, Stage::Loading);
            if let Some(addendum) = addendum {
                append_ingredients(&mut session.ingredients, &addendum);
            }
            session.preferences = Some(preferences);
            let request = suggestion_request(&session)?;
            Ok(Step::with_command(session, Command::SuggestRecipe(request)))
        }

        (Stage::Loading, Event::SuggestionReady(suggestion)) => {
            let Suggestion {
                dish,
                recipe,
                dish_image_ref,
            } = suggestion;
            let mut session = advance(session, Stage::Results);
            session.dish = dish;
            session.recipe = recipe;
            session.dish_image_ref = dish_image_ref;
            Ok(Step::settled(session))
        }
        (Stage::Loading, Event::Retry) => {
            let request = suggestion_request(&session)?;
            let mut session = session;
            session.last_error = None;
            Ok(Step::with_command(session, Command::SuggestRecipe(request)))
        }

        (Stage::Upload | Stage::Loading, Event::CollaboratorFailed(failure)) => {
            Ok(Step::settled(record_failure(session, failure)))
        }

        (Stage::Results, Event::GoHome) => {
            let mut session = session;
            session.reset();
            Ok(Step::settled(session))
        }
        (Stage::Results, Event::ChangePreferences) => {
            Ok(Step::settled(advance(session, Stage::Preferences)))
        }
        (Stage::Results, Event::GetAnother) => {
            let session = advance(session, Stage::Loading);
            let request = suggestion_request(&session)?;
            Ok(Step::with_command(session, Command::SuggestRecipe(request)))
        }

        (stage, event) => Err(WorkflowError::InvalidTransition {
            stage,
            event: event.name(),
        }),
    }
}

/// Appends user supplied text to the detected ingredients, separated by a
/// single space. Repeated submissions accumulate.
pub fn append_ingredients(ingredients: &mut String, addendum: &str) {
    let addendum = addendum.trim();
    if addendum.is_empty() {
        return;
    }

    if !ingredients.is_empty() {
        ingredients.push(' ');
    }
    ingredients.push_str(addendum);
}

fn advance(mut session: Session, stage: Stage) -> Session {
    session.stage = stage;
    session.last_error = None;
    session
}

fn record_failure(mut session: Session, failure: CollaboratorFailure) -> Session {
    session.last_error = Some(StageFailure {
        stage: session.stage,
        collaborator: failure.collaborator,
        kind: failure.kind,
        message: failure.message,
    });
    session
}

fn suggestion_request(session: &Session) -> Result<SuggestionRequest, WorkflowError> {
    let preferences = session
        .preferences
        .as_ref()
        .ok_or(WorkflowError::InputMissing("preferences"))?;

    Ok(SuggestionRequest {
        ingredients: session.ingredients.clone(),
        preferences_summary: preferences.summary(),
    })
}
