//! What each stage shows the user, derived from the session alone.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::workflow::{
    entities::{Session, Stage, StageFailure},
    preferences::{
        CALORIES_DEFAULT, CALORIES_MAX, CALORIES_MIN, CALORIES_STEP, Diet, DietaryRestriction,
        MealType, Preferences,
    },
};

pub const NO_IMAGE_MESSAGE: &str = "Sorry, no image found for the suggested dish.";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CalorieRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PreferenceOptions {
    pub diets: Vec<Diet>,
    pub meal_types: Vec<MealType>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub calories: CalorieRange,
}

impl Default for PreferenceOptions {
    fn default() -> Self {
        Self {
            diets: Diet::ALL.to_vec(),
            meal_types: MealType::ALL.to_vec(),
            dietary_restrictions: DietaryRestriction::ALL.to_vec(),
            calories: CalorieRange {
                min: CALORIES_MIN,
                max: CALORIES_MAX,
                step: CALORIES_STEP,
                default: CALORIES_DEFAULT,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DishImageView {
    Found { url: String, caption: String },
    NotFound { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageView {
    Home {
        title: String,
        description: String,
    },
    Upload {
        title: String,
        error: Option<StageFailure>,
    },
    Preferences {
        title: String,
        ingredients: String,
        options: PreferenceOptions,
        current: Option<Preferences>,
    },
    Loading {
        title: String,
        message: String,
        error: Option<StageFailure>,
    },
    Results {
        title: String,
        dish: String,
        recipe: String,
        image: DishImageView,
    },
}

impl From<&Session> for StageView {
    fn from(session: &Session) -> Self {
        match session.stage {
            Stage::Home => StageView::Home {
                title: "letAIcook".to_string(),
                description: "Upload a photo of your fridge, and we'll suggest a dish for you to prepare."
                    .to_string(),
            },
            Stage::Upload => StageView::Upload {
                title: "Let’s see what you got in your fridge".to_string(),
                error: session.last_error.clone(),
            },
            Stage::Preferences => StageView::Preferences {
                title: "Ingredients and preferences".to_string(),
                ingredients: session.ingredients.clone(),
                options: PreferenceOptions::default(),
                current: session.preferences.clone(),
            },
            Stage::Loading => StageView::Loading {
                title: "Please wait".to_string(),
                message: "Processing your request...".to_string(),
                error: session.last_error.clone(),
            },
            Stage::Results => StageView::Results {
                title: "Suggested Dish".to_string(),
                dish: session.dish.clone(),
                recipe: session.recipe.clone(),
                image: match &session.dish_image_ref {
                    Some(url) => DishImageView::Found {
                        url: url.clone(),
                        caption: session.dish.clone(),
                    },
                    None => DishImageView::NotFound {
                        message: NO_IMAGE_MESSAGE.to_string(),
                    },
                },
            },
        }
    }
}
