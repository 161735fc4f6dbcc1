use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

/// One async mutex per session, so a session never runs two stages at once
/// while different sessions proceed in parallel.
#[derive(Debug, Clone, Default)]
pub struct SessionLocks {
    inner: Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>,
}

impl SessionLocks {
    pub async fn acquire(&self, session_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(session_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    pub fn forget(&self, session_id: Uuid) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&session_id);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_session_is_serialized() {
        let locks = SessionLocks::default();
        let id = Uuid::new_v4();

        let guard = locks.acquire(id).await;
        let contender = tokio::time::timeout(Duration::from_millis(50), locks.acquire(id)).await;
        assert!(contender.is_err());

        drop(guard);
        let contender = tokio::time::timeout(Duration::from_millis(50), locks.acquire(id)).await;
        assert!(contender.is_ok());
    }

    #[tokio::test]
    async fn different_sessions_do_not_block_each_other() {
        let locks = SessionLocks::default();

        let _first = locks.acquire(Uuid::new_v4()).await;
        let second =
            tokio::time::timeout(Duration::from_millis(50), locks.acquire(Uuid::new_v4())).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn forget_drops_the_entry() {
        let locks = SessionLocks::default();
        let id = Uuid::new_v4();

        drop(locks.acquire(id).await);
        assert_eq!(locks.len(), 1);

        locks.forget(id);
        assert_eq!(locks.len(), 0);
    }
}
