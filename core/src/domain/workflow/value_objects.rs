use std::fmt;

use bytes::Bytes;

use crate::domain::workflow::{
    entities::{Collaborator, FailureKind, Session},
    preferences::PreferencesForm,
};

/// Decoded fridge photo, re-encoded in a format the vision model accepts.
#[derive(Clone, PartialEq, Eq)]
pub struct FridgeImage {
    pub data: Bytes,
    pub mime_type: String,
}

impl FridgeImage {
    pub fn jpeg(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            mime_type: "image/jpeg".to_string(),
        }
    }
}

impl fmt::Debug for FridgeImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FridgeImage")
            .field("mime_type", &self.mime_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Dish, recipe and illustration produced by one run of the loading stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub dish: String,
    pub recipe: String,
    pub dish_image_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub ingredients: String,
    pub preferences_summary: String,
}

/// Collaborator failure reported back into the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorFailure {
    pub collaborator: Collaborator,
    pub kind: FailureKind,
    pub message: String,
}

impl CollaboratorFailure {
    pub fn new(collaborator: Collaborator, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            collaborator,
            kind,
            message: message.into(),
        }
    }
}

/// Everything that can happen to a session.
///
/// The first group are user actions; the rest report the outcome of a
/// [`Command`] issued by a previous transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    SubmitUpload { image: Option<FridgeImage> },
    SubmitPreferences(PreferencesForm),
    GetAnother,
    ChangePreferences,
    GoHome,
    Retry,
    IngredientsExtracted(String),
    SuggestionReady(Suggestion),
    CollaboratorFailed(CollaboratorFailure),
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::SubmitUpload { .. } => "submit_upload",
            Event::SubmitPreferences(_) => "submit_preferences",
            Event::GetAnother => "get_another",
            Event::ChangePreferences => "change_preferences",
            Event::GoHome => "go_home",
            Event::Retry => "retry",
            Event::IngredientsExtracted(_) => "ingredients_extracted",
            Event::SuggestionReady(_) => "suggestion_ready",
            Event::CollaboratorFailed(_) => "collaborator_failed",
        }
    }
}

/// Side effect requested by a transition, executed by the workflow service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ExtractIngredients(FridgeImage),
    SuggestRecipe(SuggestionRequest),
}

/// Outcome of reducing one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub session: Session,
    pub command: Option<Command>,
}

impl Step {
    pub fn settled(session: Session) -> Self {
        Self {
            session,
            command: None,
        }
    }

    pub fn with_command(session: Session, command: Command) -> Self {
        Self {
            session,
            command: Some(command),
        }
    }
}
