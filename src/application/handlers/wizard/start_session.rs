//! StartSessionHandler - opens a new strategy session.

use std::sync::Arc;

use crate::application::{MessagePacer, SessionView};
use crate::domain::foundation::SessionId;
use crate::domain::session::StrategySession;
use crate::ports::SessionStore;

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    pacer: MessagePacer,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, pacer: MessagePacer) -> Self {
        Self { store, pacer }
    }

    /// Creates the session with its greeting and schedules the first question.
    pub async fn handle(&self) -> SessionView {
        let (session, opening) = StrategySession::start(SessionId::new());
        let handle = self.store.insert(session).await;

        let mut session = handle.lock().await;
        self.pacer.dispatch(&mut session, &handle, opening);
        tracing::info!(session_id = %session.id(), "Strategy session started");

        SessionView::from(&*session)
    }
}
