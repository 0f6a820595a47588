//! GetSessionHandler - Query handler for the current session view.

use std::sync::Arc;

use crate::application::SessionView;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

use super::super::find_session;

/// Handler for reading a session.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<SessionView, SessionError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;
        let session = handle.lock().await;
        Ok(SessionView::from(&*session))
    }
}
