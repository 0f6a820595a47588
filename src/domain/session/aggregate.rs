//! StrategySession aggregate.

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::strategy::{
    GeneratedStrategy, GenerationPhase, GenerationSlot, GenerationTicket, StrategyDocument,
};
use crate::domain::wizard::{ScheduledMessage, SubmitOutcome, Wizard};

use super::errors::SessionError;

/// One user's conversation and generated document.
#[derive(Debug, Clone)]
pub struct StrategySession {
    id: SessionId,
    wizard: Wizard,
    generation: GenerationSlot,
    created_at: Timestamp,
}

impl StrategySession {
    /// Creates a session and returns the opening question to schedule.
    pub fn start(id: SessionId) -> (Self, ScheduledMessage) {
        let wizard = Wizard::new();
        let opening = wizard.opening_message();
        let session = Self {
            id,
            wizard,
            generation: GenerationSlot::new(),
            created_at: Timestamp::now(),
        };
        (session, opening)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn generation_phase(&self) -> GenerationPhase {
        self.generation.phase()
    }

    pub fn notice(&self) -> Option<&str> {
        self.generation.notice()
    }

    pub fn document(&self) -> Option<&GeneratedStrategy> {
        self.generation.current()
    }

    /// Like [`StrategySession::document`] but an error when there is none.
    pub fn require_document(&self) -> Result<&GeneratedStrategy, SessionError> {
        self.generation.current().ok_or(SessionError::NoDocument)
    }

    pub fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        self.wizard.submit(raw_input)
    }

    pub fn deliver(&mut self, message: &ScheduledMessage) -> bool {
        self.wizard.deliver(message)
    }

    /// Restarts the wizard and discards the document.
    pub fn reset(&mut self) -> ScheduledMessage {
        self.generation.reset();
        self.wizard.reset()
    }

    /// Admits one generation call.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, SessionError> {
        if !self.wizard.is_complete() {
            return Err(SessionError::WizardIncomplete {
                answered: self.wizard.answers().answered_count(),
                total: self.wizard.total_steps(),
            });
        }
        if self.generation.is_loading() {
            return Err(SessionError::GenerationInProgress);
        }
        Ok(self.generation.begin(self.wizard.answers())?)
    }

    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        document: StrategyDocument,
    ) -> bool {
        self.generation.succeed(ticket, document, Timestamp::now())
    }

    pub fn fail_generation(&mut self, ticket: GenerationTicket) -> bool {
        self.generation.fail(ticket)
    }
}
