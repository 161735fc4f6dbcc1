use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, workflow::preferences::Preferences};

/// Position of a session in the fridge-to-recipe flow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Home,
    Upload,
    Preferences,
    Loading,
    Results,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Home => "home",
            Stage::Upload => "upload",
            Stage::Preferences => "preferences",
            Stage::Loading => "loading",
            Stage::Results => "results",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External service a stage depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collaborator {
    IngredientExtractor,
    RecipeSuggester,
    ImageLookup,
}

impl Collaborator {
    pub fn as_str(&self) -> &str {
        match self {
            Collaborator::IngredientExtractor => "ingredient_extractor",
            Collaborator::RecipeSuggester => "recipe_suggester",
            Collaborator::ImageLookup => "image_lookup",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Failed,
    TimedOut,
    Malformed,
}

impl FailureKind {
    pub fn as_str(&self) -> &str {
        match self {
            FailureKind::Failed => "failed",
            FailureKind::TimedOut => "timed out",
            FailureKind::Malformed => "returned a malformed response",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recoverable failure recorded on the session so the user can retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StageFailure {
    pub stage: Stage,
    pub collaborator: Collaborator,
    pub kind: FailureKind,
    pub message: String,
}

/// Per-interaction workflow state.
///
/// Only the reducer in [`crate::domain::workflow::machine`] changes the
/// workflow fields; `id` and `created_at` identify the interaction and survive
/// a reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub id: Uuid,
    pub stage: Stage,
    pub ingredients: String,
    pub preferences: Option<Preferences>,
    pub dish: String,
    pub recipe: String,
    pub dish_image_ref: Option<String>,
    pub last_error: Option<StageFailure>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            stage: Stage::Home,
            ingredients: String::new(),
            preferences: None,
            dish: String::new(),
            recipe: String::new(),
            dish_image_ref: None,
            last_error: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Back to the initial stage with every workflow field emptied.
    pub fn reset(&mut self) {
        self.stage = Stage::Home;
        self.ingredients.clear();
        self.preferences = None;
        self.dish.clear();
        self.recipe.clear();
        self.dish_image_ref = None;
        self.last_error = None;
    }

    pub fn touch(mut self) -> Self {
        self.updated_at = Utc::now();
        self
    }

    /// True when every workflow field holds its initial value.
    pub fn is_pristine(&self) -> bool {
        self.stage == Stage::Home
            && self.ingredients.is_empty()
            && self.preferences.is_none()
            && self.dish.is_empty()
            && self.recipe.is_empty()
            && self.dish_image_ref.is_none()
            && self.last_error.is_none()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_home_with_empty_fields() {
        let session = Session::new();

        assert_eq!(session.stage, Stage::Home);
        assert!(session.is_pristine());
        assert_eq!(session.created_at, session.updated_at);
        assert_eq!(session.id.get_version_num(), 7);
    }

    #[test]
    fn reset_keeps_identity() {
        let mut session = Session::new();
        let id = session.id;
        session.stage = Stage::Results;
        session.ingredients = "eggs".to_string();
        session.dish = "Omelette".to_string();
        session.dish_image_ref = Some("https://img.example/omelette.jpg".to_string());

        session.reset();

        assert_eq!(session.id, id);
        assert!(session.is_pristine());
    }

    #[test]
    fn stage_serializes_lowercase() {
        let value = serde_json::to_value(Stage::Preferences).unwrap();
        assert_eq!(value, serde_json::json!("preferences"));
    }
}
