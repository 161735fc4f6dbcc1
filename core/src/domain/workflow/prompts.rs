//! Prompt templates sent to the language models.

pub const PHOTO_PROMPT: &str = "What ingredients do you see? Estimate the amount of each ingredient. \
IMPORTANT: Write straightforward list answer with no explanations";

pub fn photo_prompt() -> String {
    PHOTO_PROMPT.to_string()
}

pub fn dish_prompt(ingredients: &str, preferences: &str) -> String {
    format!(
        "Suggest a dish based on the following ingredients: {ingredients}. \
         Consider these preferences: {preferences}. \
         IMPORTANT: suggest dish only, no recipe and no additional comments"
    )
}

pub fn recipe_prompt(dish: &str, ingredients: &str, preferences: &str) -> String {
    format!(
        "Suggest a recipe for the {dish}. \
         I have following ingredients: {ingredients} and these preferences: {preferences}. \
         IMPORTANT: suggest recipe and its details only; do not write your opinion or speculations. \
         VERY IMPORTANT: all the text should be in the same font size."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_prompt_embeds_inputs() {
        let prompt = dish_prompt("2 eggs, 1L milk", "diet: Vegan");

        assert_eq!(
            prompt,
            "Suggest a dish based on the following ingredients: 2 eggs, 1L milk. \
             Consider these preferences: diet: Vegan. \
             IMPORTANT: suggest dish only, no recipe and no additional comments"
        );
    }

    #[test]
    fn recipe_prompt_names_the_dish_first() {
        let prompt = recipe_prompt("Banana Pancakes", "eggs", "hungry: True");

        assert!(prompt.starts_with("Suggest a recipe for the Banana Pancakes. "));
        assert!(prompt.contains("I have following ingredients: eggs and these preferences: hungry: True."));
    }

    #[test]
    fn photo_prompt_asks_for_a_plain_list() {
        assert!(photo_prompt().contains("no explanations"));
    }
}
