//! SubmitAnswerHandler - records one wizard answer.

use std::sync::Arc;

use crate::application::{MessagePacer, SessionView};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::domain::wizard::{AnswerKey, SubmitOutcome};
use crate::ports::SessionStore;

use super::super::find_session;

/// Command carrying raw user input.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub text: String,
}

/// Result of a submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub view: SessionView,
    /// Key the input was recorded under; `None` when the input was ignored.
    pub recorded: Option<AnswerKey>,
}

/// Handler for wizard submissions.
pub struct SubmitAnswerHandler {
    store: Arc<dyn SessionStore>,
    pacer: MessagePacer,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>, pacer: MessagePacer) -> Self {
        Self { store, pacer }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, SessionError> {
        let handle = find_session(self.store.as_ref(), cmd.session_id).await?;
        let mut session = handle.lock().await;

        let recorded = match session.submit(&cmd.text) {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Recorded { key, follow_up } => {
                tracing::debug!(session_id = %cmd.session_id, key = %key, "Answer recorded");
                self.pacer.dispatch(&mut session, &handle, follow_up);
                Some(key)
            }
        };

        Ok(SubmitAnswerResult {
            view: SessionView::from(&*session),
            recorded,
        })
    }
}
