//! CloseSessionHandler - drops a session, everything scheduled for it, and
//! anything it copied.

use std::sync::Arc;

use crate::application::MessagePacer;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{Clipboard, SessionStore};

/// Handler for closing sessions.
pub struct CloseSessionHandler {
    store: Arc<dyn SessionStore>,
    pacer: MessagePacer,
    clipboard: Arc<dyn Clipboard>,
}

impl CloseSessionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        pacer: MessagePacer,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            store,
            pacer,
            clipboard,
        }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<(), SessionError> {
        self.pacer.cancel(session_id);
        if !self.store.remove(session_id).await {
            return Err(SessionError::not_found(session_id));
        }
        self.clipboard.forget(session_id).await;
        tracing::info!(%session_id, "Strategy session closed");
        Ok(())
    }
}
