//! Session Store Port - registry of live strategy sessions.
//!
//! Sessions are held behind an async mutex so every user action is processed
//! to completion before the next one touches the same session.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::SessionId;
use crate::domain::session::StrategySession;

/// Handle to one live session.
pub type SharedSession = Arc<Mutex<StrategySession>>;

/// Port for keeping sessions alive between requests.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Adds a session and returns its shared handle.
    async fn insert(&self, session: StrategySession) -> SharedSession;

    /// Looks up a session.
    async fn get(&self, id: SessionId) -> Option<SharedSession>;

    /// Drops a session. Returns false if it did not exist.
    async fn remove(&self, id: SessionId) -> bool;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
