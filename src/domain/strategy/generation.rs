//! Generation slot - current document plus the single in-flight guard.
//!
//! ```text
//! Empty ──generate──▶ Loading ──ok──▶ Ready
//!   ▲                   │  ▲             │
//!   │                   │  └──generate───┘
//!   └──────reset────────┴──err──▶ Failed (Ready if a document was kept)
//! ```

use serde::Serialize;

use crate::domain::foundation::{StateMachine, Timestamp, ValidationError};
use crate::domain::wizard::AnswerSet;

use super::document::StrategyDocument;
use super::renderer::{export_filename, render, RenderContext};

/// The one user-visible message for any generation failure.
pub const FAILURE_NOTICE: &str = "Failed to generate strategy. Please check your API key.";

/// Observable phase of the document renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    /// No document, no failure.
    Empty,
    /// A generation call is outstanding.
    Loading,
    /// A document is held.
    Ready,
    /// Last call failed and there is no document.
    Failed,
}

impl StateMachine for GenerationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GenerationPhase::*;
        matches!(
            (self, target),
            (Empty, Loading)
                | (Ready, Loading)
                | (Failed, Loading)
                | (Loading, Ready)
                | (Loading, Failed)
                | (Loading, Empty)
                | (Ready, Empty)
                | (Failed, Empty)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GenerationPhase::*;
        match self {
            Empty => vec![Loading],
            Loading => vec![Ready, Failed, Empty],
            Ready => vec![Loading, Empty],
            Failed => vec![Loading, Empty],
        }
    }
}

/// A received document together with what it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStrategy {
    pub document: StrategyDocument,
    pub answers: AnswerSet,
    pub generated_at: Timestamp,
}

impl GeneratedStrategy {
    /// Notepad text for display, export, and clipboard.
    pub fn render(&self) -> String {
        render(
            &self.document,
            &RenderContext::new(&self.answers, self.generated_at),
        )
    }

    /// `<brand>_Content_Strategy.txt`
    pub fn export_filename(&self) -> String {
        export_filename(&self.answers.brand)
    }
}

/// Proof that a generation call was admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    id: u64,
    epoch: u64,
    answers: AnswerSet,
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Answers snapshot to send to the generation service.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}

/// Holds at most one document and admits at most one generation at a time.
#[derive(Debug, Clone, Default)]
pub struct GenerationSlot {
    current: Option<GeneratedStrategy>,
    in_flight: Option<u64>,
    notice: Option<String>,
    epoch: u64,
    next_ticket: u64,
}

impl GenerationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GenerationPhase {
        if self.in_flight.is_some() {
            GenerationPhase::Loading
        } else if self.current.is_some() {
            GenerationPhase::Ready
        } else if self.notice.is_some() {
            GenerationPhase::Failed
        } else {
            GenerationPhase::Empty
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn current(&self) -> Option<&GeneratedStrategy> {
        self.current.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Enters `Loading`. Fails while another call is outstanding.
    pub fn begin(&mut self, answers: &AnswerSet) -> Result<GenerationTicket, ValidationError> {
        self.phase().transition_to(GenerationPhase::Loading)?;

        self.next_ticket += 1;
        let ticket = GenerationTicket {
            id: self.next_ticket,
            epoch: self.epoch,
            answers: answers.clone(),
        };
        self.in_flight = Some(ticket.id);
        self.notice = None;
        Ok(ticket)
    }

    /// Stores a received document. Returns false if the ticket is stale.
    pub fn succeed(
        &mut self,
        ticket: GenerationTicket,
        document: StrategyDocument,
        generated_at: Timestamp,
    ) -> bool {
        if !self.release(&ticket) {
            return false;
        }
        self.current = Some(GeneratedStrategy {
            document,
            answers: ticket.answers,
            generated_at,
        });
        true
    }

    /// Records a failure, keeping any stored document.
    ///
    /// Returns false if the ticket is stale and no notice was raised.
    pub fn fail(&mut self, ticket: GenerationTicket) -> bool {
        if !self.release(&ticket) {
            return false;
        }
        self.notice = Some(FAILURE_NOTICE.to_string());
        true
    }

    /// Drops the document and notice.
    ///
    /// An outstanding call keeps the guard until it resolves; its result is
    /// then discarded.
    pub fn reset(&mut self) {
        self.current = None;
        self.notice = None;
        self.epoch += 1;
    }

    fn release(&mut self, ticket: &GenerationTicket) -> bool {
        if self.in_flight == Some(ticket.id) {
            self.in_flight = None;
        }
        ticket.epoch == self.epoch
    }
}
