use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    workflow::{entities::Session, ports::SessionRepository},
};

/// Process-local session store. Reads hand out clones, so interactions never
/// share mutable state.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());

        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn save(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(&session.id) {
            return Err(CoreError::NotFound);
        }
        sessions.insert(session.id, session.clone());

        Ok(session)
    }

    async fn delete(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .map(|_| ())
            .ok_or(CoreError::NotFound)
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.sessions.read().await.len())
    }

    async fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<Vec<Uuid>, CoreError> {
        let mut evicted = Vec::new();
        self.sessions.write().await.retain(|id, session| {
            let keep = session.updated_at >= cutoff;
            if !keep {
                evicted.push(*id);
            }
            keep
        });

        Ok(evicted)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::domain::workflow::entities::Stage;

    #[tokio::test]
    async fn stored_sessions_are_copies() {
        let repository = InMemorySessionRepository::default();
        let session = repository.create(Session::new()).await.unwrap();

        let mut copy = repository.get_by_id(session.id).await.unwrap().unwrap();
        copy.stage = Stage::Results;

        let stored = repository.get_by_id(session.id).await.unwrap().unwrap();
        assert_eq!(stored.stage, Stage::Home);
    }

    #[tokio::test]
    async fn save_requires_existing_session() {
        let repository = InMemorySessionRepository::default();

        assert_eq!(
            repository.save(Session::new()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn delete_and_count() {
        let repository = InMemorySessionRepository::default();
        let first = repository.create(Session::new()).await.unwrap();
        repository.create(Session::new()).await.unwrap();
        assert_eq!(repository.count().await.unwrap(), 2);

        repository.delete(first.id).await.unwrap();

        assert_eq!(repository.count().await.unwrap(), 1);
        assert_eq!(repository.delete(first.id).await, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn evict_idle_keeps_recent_sessions() {
        let repository = InMemorySessionRepository::default();
        let mut stale = Session::new();
        stale.updated_at -= TimeDelta::hours(2);
        let stale = repository.create(stale).await.unwrap();
        let fresh = repository.create(Session::new()).await.unwrap();

        let evicted = repository
            .evict_idle(Utc::now() - TimeDelta::hours(1))
            .await
            .unwrap();

        assert_eq!(evicted, vec![stale.id]);
        assert_eq!(repository.get_by_id(stale.id).await.unwrap(), None);
        assert!(repository.get_by_id(fresh.id).await.unwrap().is_some());
        assert_eq!(repository.count().await.unwrap(), 1);
    }
}
