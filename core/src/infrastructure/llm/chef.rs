use crate::domain::{
    common::entities::app_errors::CoreError,
    workflow::{
        ports::{IngredientExtractor, LLMClient, RecipeSuggester},
        prompts::{dish_prompt, photo_prompt, recipe_prompt},
        value_objects::FridgeImage,
    },
};

/// Extractor and suggester backed by a single [`LLMClient`].
#[derive(Debug, Clone)]
pub struct LlmChef<L> {
    llm: L,
}

impl<L: LLMClient> LlmChef<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }
}

fn require_text(text: String, what: &str) -> Result<String, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::MalformedResponse(format!("empty {what}")));
    }

    Ok(text.to_string())
}

impl<L: LLMClient> IngredientExtractor for LlmChef<L> {
    async fn extract(&self, image: FridgeImage) -> Result<String, CoreError> {
        let text = self
            .llm
            .generate_with_image(photo_prompt(), image.data, image.mime_type)
            .await?;

        require_text(text, "ingredient list")
    }
}

impl<L: LLMClient> RecipeSuggester for LlmChef<L> {
    async fn suggest_dish(
        &self,
        ingredients: String,
        preferences_summary: String,
    ) -> Result<String, CoreError> {
        let text = self
            .llm
            .generate_with_text(dish_prompt(&ingredients, &preferences_summary))
            .await?;

        require_text(text, "dish name")
    }

    async fn suggest_recipe(
        &self,
        ingredients: String,
        preferences_summary: String,
        dish_name: String,
    ) -> Result<String, CoreError> {
        let text = self
            .llm
            .generate_with_text(recipe_prompt(
                &dish_name,
                &ingredients,
                &preferences_summary,
            ))
            .await?;

        require_text(text, "recipe")
    }
}
