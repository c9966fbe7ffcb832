//! In-Memory Design Store Adapter
//!
//! Sessions live only as long as the process. The outer lock guards the
//! map; each session carries its own mutex for edits. Sessions untouched
//! for longer than the idle TTL are swept, and the map admits at most
//! `max_sessions` entries.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time;

use crate::domain::foundation::DesignId;
use crate::domain::wizard::WizardController;
use crate::ports::{DesignHandle, DesignStore, StoreError};

/// Default upper bound on live sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug)]
struct Session {
    handle: DesignHandle,
    last_touched: Instant,
}

impl Session {
    fn new(handle: DesignHandle) -> Self {
        Self {
            handle,
            last_touched: Instant::now(),
        }
    }
}

/// In-memory storage for design sessions
#[derive(Debug, Clone)]
pub struct InMemoryDesignStore {
    sessions: Arc<RwLock<HashMap<DesignId, Session>>>,
    max_sessions: usize,
}

impl Default for InMemoryDesignStore {
    fn default() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }
}

impl InMemoryDesignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store admitting at most `max_sessions` live sessions.
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Drop all sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    /// Discards sessions not touched within `idle_ttl`.
    ///
    /// Returns the number of sessions removed.
    pub async fn evict_idle(&self, idle_ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_touched.elapsed() <= idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Evicted idle design sessions");
        }
        evicted
    }

    /// Runs [`evict_idle`](Self::evict_idle) every `interval` on a
    /// background task.
    pub fn spawn_sweeper(&self, idle_ttl: Duration, interval: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            loop {
                ticker.tick().await;
                store.evict_idle(idle_ttl).await;
            }
        })
    }
}

#[async_trait]
impl DesignStore for InMemoryDesignStore {
    async fn insert(
        &self,
        id: DesignId,
        controller: WizardController,
    ) -> Result<DesignHandle, StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        if sessions.len() >= self.max_sessions {
            tracing::warn!(limit = self.max_sessions, "Design session limit reached");
            return Err(StoreError::CapacityReached(self.max_sessions));
        }
        let handle = Arc::new(Mutex::new(controller));
        sessions.insert(id, Session::new(Arc::clone(&handle)));
        Ok(handle)
    }

    async fn get(&self, id: DesignId) -> Result<DesignHandle, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        session.last_touched = Instant::now();
        Ok(Arc::clone(&session.handle))
    }

    async fn remove(&self, id: DesignId) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::Catalog;
    use crate::domain::foundation::SchoolLevel;

    fn controller() -> WizardController {
        WizardController::new(Arc::new(Catalog::embedded().unwrap().clone()))
    }

    #[tokio::test]
    async fn insert_then_get_returns_same_session() {
        let store = InMemoryDesignStore::new();
        let id = DesignId::new();
        let handle = store.insert(id, controller()).await.unwrap();
        handle.lock().await.select_school_level(Some(SchoolLevel::High));

        let fetched = store.get(id).await.unwrap();
        assert_eq!(
            fetched.lock().await.state().school_level(),
            Some(SchoolLevel::High)
        );
    }

    #[tokio::test]
    async fn get_unknown_id_fails() {
        let store = InMemoryDesignStore::new();
        let id = DesignId::new();
        assert_eq!(store.get(id).await.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = InMemoryDesignStore::new();
        let id = DesignId::new();
        store.insert(id, controller()).await.unwrap();
        assert_eq!(
            store.insert(id, controller()).await.unwrap_err(),
            StoreError::AlreadyExists(id)
        );
    }

    #[tokio::test]
    async fn remove_discards_session() {
        let store = InMemoryDesignStore::new();
        let id = DesignId::new();
        store.insert(id, controller()).await.unwrap();
        assert_eq!(store.count().await, 1);

        store.remove(id).await.unwrap();
        assert_eq!(store.count().await, 0);
        assert!(store.remove(id).await.is_err());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemoryDesignStore::new();
        store.insert(DesignId::new(), controller()).await.unwrap();
        store.insert(DesignId::new(), controller()).await.unwrap();
        store.clear().await;
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn insert_beyond_limit_is_rejected() {
        let store = InMemoryDesignStore::with_max_sessions(2);
        store.insert(DesignId::new(), controller()).await.unwrap();
        store.insert(DesignId::new(), controller()).await.unwrap();

        assert_eq!(
            store.insert(DesignId::new(), controller()).await.unwrap_err(),
            StoreError::CapacityReached(2)
        );
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn removing_a_session_frees_capacity() {
        let store = InMemoryDesignStore::with_max_sessions(1);
        let id = DesignId::new();
        store.insert(id, controller()).await.unwrap();
        store.remove(id).await.unwrap();

        assert!(store.insert(DesignId::new(), controller()).await.is_ok());
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_and_touched_ones_kept() {
        let store = InMemoryDesignStore::new();
        let idle = DesignId::new();
        let active = DesignId::new();
        store.insert(idle, controller()).await.unwrap();
        store.insert(active, controller()).await.unwrap();

        time::sleep(Duration::from_millis(80)).await;
        store.get(active).await.unwrap();

        let evicted = store.evict_idle(Duration::from_millis(50)).await;

        assert_eq!(evicted, 1);
        assert_eq!(store.get(idle).await.unwrap_err(), StoreError::NotFound(idle));
        assert!(store.get(active).await.is_ok());
    }

    #[tokio::test]
    async fn fresh_sessions_survive_eviction() {
        let store = InMemoryDesignStore::new();
        store.insert(DesignId::new(), controller()).await.unwrap();

        assert_eq!(store.evict_idle(Duration::from_secs(60)).await, 0);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn sweeper_discards_idle_sessions() {
        let store = InMemoryDesignStore::new();
        let id = DesignId::new();
        store.insert(id, controller()).await.unwrap();

        let sweeper = store.spawn_sweeper(Duration::from_millis(20), Duration::from_millis(10));
        time::sleep(Duration::from_millis(150)).await;
        sweeper.abort();

        assert_eq!(store.count().await, 0);
    }
}
