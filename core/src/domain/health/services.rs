use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    workflow::ports::{DishImageLookup, IngredientExtractor, RecipeSuggester, SessionRepository},
};

impl<S, E, R, I> HealthCheckService for Service<S, E, R, I>
where
    S: SessionRepository,
    E: IngredientExtractor,
    R: RecipeSuggester,
    I: DishImageLookup,
{
    async fn readness(&self) -> Result<ReadinessStatus, CoreError> {
        let active_sessions = self.session_repository.count().await?;

        Ok(ReadinessStatus { active_sessions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::WorkflowTimeouts,
        workflow::ports::{
            MockDishImageLookup, MockIngredientExtractor, MockRecipeSuggester,
            MockSessionRepository,
        },
    };

    #[tokio::test]
    async fn readiness_reports_session_count() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_count()
            .returning(|| Box::pin(async { Ok(3) }));
        let service = Service::new(
            sessions,
            MockIngredientExtractor::new(),
            MockRecipeSuggester::new(),
            MockDishImageLookup::new(),
            WorkflowTimeouts::default(),
        );

        let status = service.readness().await.unwrap();

        assert_eq!(status, ReadinessStatus { active_sessions: 3 });
    }

    #[tokio::test]
    async fn readiness_propagates_store_errors() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_count().returning(|| {
            Box::pin(async { Err(CoreError::InternalServerError("store closed".to_string())) })
        });
        let service = Service::new(
            sessions,
            MockIngredientExtractor::new(),
            MockRecipeSuggester::new(),
            MockDishImageLookup::new(),
            WorkflowTimeouts::default(),
        );

        assert!(service.readness().await.is_err());
    }
}
