//! Read-side snapshot of a strategy session.

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::StrategySession;
use crate::domain::strategy::GenerationPhase;
use crate::domain::wizard::{AnswerKey, AnswerSet, QuestionDescriptor, TranscriptEntry};

/// Most recently captured answer, shown as a chip above the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedAnswer {
    pub key: AnswerKey,
    pub value: String,
}

/// Everything a client needs to draw the chat panel and the notepad header.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub id: SessionId,
    pub transcript: Vec<TranscriptEntry>,
    pub step: usize,
    pub total_steps: usize,
    pub is_complete: bool,
    pub current_question: Option<QuestionDescriptor>,
    pub captured: Option<CapturedAnswer>,
    pub answers: AnswerSet,
    pub phase: GenerationPhase,
    pub notice: Option<String>,
    pub has_document: bool,
    pub created_at: Timestamp,
}

impl From<&StrategySession> for SessionView {
    fn from(session: &StrategySession) -> Self {
        let wizard = session.wizard();
        let captured = wizard.last_captured().map(|key| CapturedAnswer {
            key,
            value: wizard.answers().get(key).to_string(),
        });

        Self {
            id: session.id(),
            transcript: wizard.transcript().entries().to_vec(),
            step: wizard.step(),
            total_steps: wizard.total_steps(),
            is_complete: wizard.is_complete(),
            current_question: wizard.current_question().copied(),
            captured,
            answers: wizard.answers().clone(),
            phase: session.generation_phase(),
            notice: session.notice().map(str::to_string),
            has_document: session.document().is_some(),
            created_at: session.created_at(),
        }
    }
}
