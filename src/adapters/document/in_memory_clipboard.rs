//! In-memory clipboard, one slot per session.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::ports::{Clipboard, ClipboardError};

/// Clipboard kept in process memory.
///
/// A server has no access to the user's clipboard, so copied text is parked
/// here and returned to the client, which places it on the real one.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    slots: RwLock<HashMap<SessionId, String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text copied for `session_id`.
    pub async fn contents(&self, session_id: SessionId) -> Option<String> {
        self.slots.read().await.get(&session_id).cloned()
    }
}

#[async_trait]
impl Clipboard for InMemoryClipboard {
    async fn copy_text(&self, session_id: SessionId, text: &str) -> Result<(), ClipboardError> {
        self.slots
            .write()
            .await
            .insert(session_id, text.to_string());
        Ok(())
    }

    async fn forget(&self, session_id: SessionId) {
        self.slots.write().await.remove(&session_id);
    }
}
