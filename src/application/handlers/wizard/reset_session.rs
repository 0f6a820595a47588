//! ResetSessionHandler - "Start Over".

use std::sync::Arc;

use crate::application::{MessagePacer, SessionView};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

use super::super::find_session;

/// Handler for resetting a session to its initial state.
pub struct ResetSessionHandler {
    store: Arc<dyn SessionStore>,
    pacer: MessagePacer,
}

impl ResetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, pacer: MessagePacer) -> Self {
        Self { store, pacer }
    }

    /// Clears answers, transcript and document, then re-asks the first question.
    pub async fn handle(&self, session_id: SessionId) -> Result<SessionView, SessionError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;
        let mut session = handle.lock().await;

        self.pacer.cancel(session_id);
        let opening = session.reset();
        self.pacer.dispatch(&mut session, &handle, opening);
        tracing::info!(%session_id, "Strategy session reset");

        Ok(SessionView::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::{
        StartSessionHandler, SubmitAnswerCommand, SubmitAnswerHandler,
    };
    use crate::config::PacingConfig;
    use crate::domain::strategy::GenerationPhase;
    use crate::domain::wizard::GREETING_MESSAGE;

    #[tokio::test]
    async fn reset_returns_to_greeting_and_first_question() {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let pacer = MessagePacer::new(PacingConfig::immediate());
        let id = StartSessionHandler::new(store.clone(), pacer.clone())
            .handle()
            .await
            .id;
        let submit = SubmitAnswerHandler::new(store.clone(), pacer.clone());
        for input in ["Acme", "Coffee"] {
            submit
                .handle(SubmitAnswerCommand {
                    session_id: id,
                    text: input.to_string(),
                })
                .await
                .unwrap();
        }

        let view = ResetSessionHandler::new(store, pacer).handle(id).await.unwrap();

        assert_eq!(view.step, 0);
        assert_eq!(view.answers.answered_count(), 0);
        assert_eq!(view.transcript.len(), 2);
        assert_eq!(view.transcript[0].text, GREETING_MESSAGE);
        assert_eq!(view.transcript[1].text, "What's your brand name?");
        assert_eq!(view.phase, GenerationPhase::Empty);
    }
}
