use std::sync::Arc;

use crate::domain::{
    common::WorkflowTimeouts,
    workflow::{
        locks::SessionLocks,
        ports::{DishImageLookup, IngredientExtractor, RecipeSuggester, SessionRepository},
    },
};

/// Entry point of the core: every `*Service` port is implemented on this type.
#[derive(Clone)]
pub struct Service<S, E, R, I>
where
    S: SessionRepository,
    E: IngredientExtractor,
    R: RecipeSuggester,
    I: DishImageLookup,
{
    pub(crate) session_repository: Arc<S>,
    pub(crate) ingredient_extractor: Arc<E>,
    pub(crate) recipe_suggester: Arc<R>,
    pub(crate) image_lookup: Arc<I>,
    pub(crate) timeouts: WorkflowTimeouts,
    pub(crate) session_locks: SessionLocks,
}

impl<S, E, R, I> Service<S, E, R, I>
where
    S: SessionRepository,
    E: IngredientExtractor,
    R: RecipeSuggester,
    I: DishImageLookup,
{
    pub fn new(
        session_repository: S,
        ingredient_extractor: E,
        recipe_suggester: R,
        image_lookup: I,
        timeouts: WorkflowTimeouts,
    ) -> Self {
        Self {
            session_repository: Arc::new(session_repository),
            ingredient_extractor: Arc::new(ingredient_extractor),
            recipe_suggester: Arc::new(recipe_suggester),
            image_lookup: Arc::new(image_lookup),
            timeouts,
            session_locks: SessionLocks::default(),
        }
    }
}
