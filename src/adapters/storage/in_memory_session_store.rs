//! In-Memory Session Store Adapter
//!
//! Keeps live strategy sessions in a map for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::SessionId;
use crate::domain::session::StrategySession;
use crate::ports::{SessionStore, SharedSession};

/// In-memory registry of sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SharedSession>>>,
}

impl InMemorySessionStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: StrategySession) -> SharedSession {
        let id = session.id();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, shared.clone());
        shared
    }

    async fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    async fn remove(&self, id: SessionId) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
