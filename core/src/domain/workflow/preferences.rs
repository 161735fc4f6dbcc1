use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::workflow::errors::WorkflowError;

pub const CALORIES_MIN: u32 = 100;
pub const CALORIES_MAX: u32 = 2000;
pub const CALORIES_STEP: u32 = 50;
pub const CALORIES_DEFAULT: u32 = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Diet {
    Vegan,
    Vegetarian,
    #[serde(rename = "Meat Eater")]
    MeatEater,
    #[default]
    #[serde(rename = "No preference")]
    NoPreference,
}

impl Diet {
    pub const ALL: [Diet; 4] = [
        Diet::Vegan,
        Diet::Vegetarian,
        Diet::MeatEater,
        Diet::NoPreference,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Diet::Vegan => "Vegan",
            Diet::Vegetarian => "Vegetarian",
            Diet::MeatEater => "Meat Eater",
            Diet::NoPreference => "No preference",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DietaryRestriction {
    Halal,
    Kosher,
    #[default]
    #[serde(rename = "No preference")]
    NoPreference,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 3] = [
        DietaryRestriction::Halal,
        DietaryRestriction::Kosher,
        DietaryRestriction::NoPreference,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DietaryRestriction::Halal => "Halal",
            DietaryRestriction::Kosher => "Kosher",
            DietaryRestriction::NoPreference => "No preference",
        }
    }
}

/// Preferences captured by one submission of the preferences form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Preferences {
    pub diet: Diet,
    pub meal_type: MealType,
    pub calories: u32,
    pub dietary_restriction: DietaryRestriction,
    pub hungry: bool,
    pub additions: String,
}

impl Preferences {
    /// Named fields in the order they are presented to the suggester.
    pub fn fields(&self) -> [(&'static str, String); 6] {
        [
            ("diet", self.diet.as_str().to_string()),
            ("meal_type", self.meal_type.as_str().to_string()),
            ("calories", self.calories.to_string()),
            (
                "dietary_restriction",
                self.dietary_restriction.as_str().to_string(),
            ),
            ("hungry", if self.hungry { "True" } else { "False" }.to_string()),
            ("additions", self.additions.clone()),
        ]
    }

    /// `key: value` pairs joined by `, `, in [`Preferences::fields`] order.
    pub fn summary(&self) -> String {
        self.fields()
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raw submission of the preferences form.
///
/// `ingredient_addendum` is free text the user wants added to the detected
/// ingredients; it is not part of [`Preferences`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferencesForm {
    pub diet: Diet,
    pub meal_type: MealType,
    pub calories: u32,
    pub dietary_restriction: DietaryRestriction,
    pub hungry: bool,
    #[serde(default)]
    pub additions: String,
    #[serde(default)]
    pub ingredient_addendum: Option<String>,
}

impl PreferencesForm {
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if !(CALORIES_MIN..=CALORIES_MAX).contains(&self.calories) {
            return Err(WorkflowError::InvalidPreferences(format!(
                "calories must be between {} and {}",
                CALORIES_MIN, CALORIES_MAX
            )));
        }

        if self.calories % CALORIES_STEP != 0 {
            return Err(WorkflowError::InvalidPreferences(format!(
                "calories must be a multiple of {}",
                CALORIES_STEP
            )));
        }

        Ok(())
    }

    pub fn into_parts(self) -> Result<(Preferences, Option<String>), WorkflowError> {
        self.validate()?;

        let preferences = Preferences {
            diet: self.diet,
            meal_type: self.meal_type,
            calories: self.calories,
            dietary_restriction: self.dietary_restriction,
            hungry: self.hungry,
            additions: self.additions,
        };

        Ok((preferences, self.ingredient_addendum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakfast() -> Preferences {
        Preferences {
            diet: Diet::Vegan,
            meal_type: MealType::Breakfast,
            calories: 400,
            dietary_restriction: DietaryRestriction::NoPreference,
            hungry: true,
            additions: "banana".to_string(),
        }
    }

    #[test]
    fn summary_uses_stable_key_order() {
        assert_eq!(
            breakfast().summary(),
            "diet: Vegan, meal_type: Breakfast, calories: 400, \
             dietary_restriction: No preference, hungry: True, additions: banana"
        );
    }

    #[test]
    fn summary_renders_empty_additions() {
        let preferences = Preferences {
            hungry: false,
            additions: String::new(),
            ..breakfast()
        };

        assert!(preferences.summary().ends_with("hungry: False, additions: "));
    }

    #[test]
    fn diet_uses_display_names_on_the_wire() {
        let diet: Diet = serde_json::from_str("\"Meat Eater\"").unwrap();
        assert_eq!(diet, Diet::MeatEater);
        assert_eq!(
            serde_json::to_string(&DietaryRestriction::NoPreference).unwrap(),
            "\"No preference\""
        );
    }

    #[test]
    fn form_rejects_calories_out_of_range() {
        let form = PreferencesForm {
            diet: Diet::Vegan,
            meal_type: MealType::Dinner,
            calories: 2050,
            dietary_restriction: DietaryRestriction::Halal,
            hungry: false,
            additions: String::new(),
            ingredient_addendum: None,
        };

        assert!(matches!(
            form.validate(),
            Err(WorkflowError::InvalidPreferences(_))
        ));
    }

    #[test]
    fn form_rejects_calories_off_step() {
        let form = PreferencesForm {
            diet: Diet::Vegan,
            meal_type: MealType::Dinner,
            calories: 425,
            dietary_restriction: DietaryRestriction::Halal,
            hungry: false,
            additions: String::new(),
            ingredient_addendum: None,
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn form_splits_addendum_from_preferences() {
        let form = PreferencesForm {
            diet: Diet::Vegan,
            meal_type: MealType::Breakfast,
            calories: 400,
            dietary_restriction: DietaryRestriction::NoPreference,
            hungry: true,
            additions: "banana".to_string(),
            ingredient_addendum: Some("oat milk".to_string()),
        };

        let (preferences, addendum) = form.into_parts().unwrap();

        assert_eq!(preferences, breakfast());
        assert_eq!(addendum.as_deref(), Some("oat milk"));
    }
}
