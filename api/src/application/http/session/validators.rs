use letaicook_core::domain::workflow::{
    CALORIES_MAX, CALORIES_MIN, CALORIES_STEP, Diet, DietaryRestriction, MealType, PreferencesForm,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn calorie_step(calories: u32) -> Result<(), ValidationError> {
    if calories % CALORIES_STEP != 0 {
        return Err(ValidationError::new("calorie_step")
            .with_message("calories must be a multiple of 50".into()));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPreferencesValidator {
    pub diet: Diet,

    pub meal_type: MealType,

    #[validate(
        range(
            min = CALORIES_MIN,
            max = CALORIES_MAX,
            message = "calories must be between 100 and 2000"
        ),
        custom(function = "calorie_step")
    )]
    pub calories: u32,

    pub dietary_restriction: DietaryRestriction,

    pub hungry: bool,

    #[serde(default)]
    #[validate(length(max = 500, message = "additions must be at most 500 characters"))]
    pub additions: String,

    /// Free text appended to the detected ingredients.
    #[serde(default)]
    #[validate(length(max = 1000, message = "ingredient_addendum must be at most 1000 characters"))]
    pub ingredient_addendum: Option<String>,
}

impl From<SubmitPreferencesValidator> for PreferencesForm {
    fn from(payload: SubmitPreferencesValidator) -> Self {
        Self {
            diet: payload.diet,
            meal_type: payload.meal_type,
            calories: payload.calories,
            dietary_restriction: payload.dietary_restriction,
            hungry: payload.hungry,
            additions: payload.additions,
            ingredient_addendum: payload.ingredient_addendum,
        }
    }
}
