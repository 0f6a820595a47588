//! Wizard controller - linear five-step intake state machine.

use super::answers::AnswerSet;
use super::question::{AnswerKey, QuestionDescriptor, QUESTIONS};
use super::transcript::{Transcript, TranscriptEntry};

/// First transcript entry of every conversation.
pub const GREETING_MESSAGE: &str =
    "Hello! I'm your AI Content Strategist. Let's build your social media roadmap. 🚀";

/// System entry appended once the last answer is recorded.
pub const CLOSING_MESSAGE: &str =
    "Perfect! I have all the details. Ready to generate your strategy?";

/// Which pacing delay applies to a scheduled message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// First question after a start or reset.
    Opening,
    /// Follow-up question or the closing entry.
    FollowUp,
}

/// A system transcript entry waiting to be delivered.
///
/// Carries the wizard epoch it was scheduled in; [`Wizard::deliver`] refuses
/// messages from an older epoch so a reset can never be polluted by a
/// question scheduled before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMessage {
    epoch: u64,
    text: String,
    pacing: Pacing,
}

impl ScheduledMessage {
    fn new(epoch: u64, text: impl Into<String>, pacing: Pacing) -> Self {
        Self {
            epoch,
            text: text.into(),
            pacing,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input, or the wizard was already complete. Nothing changed.
    Ignored,
    /// Answer recorded; `follow_up` is the next question or the closing entry.
    Recorded {
        key: AnswerKey,
        follow_up: ScheduledMessage,
    },
}

impl SubmitOutcome {
    pub fn follow_up(&self) -> Option<&ScheduledMessage> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Recorded { follow_up, .. } => Some(follow_up),
        }
    }
}

/// The intake wizard.
///
/// # Invariants
///
/// - `step` is in `0..=5` and only increases, by one, on a recorded answer
/// - the number of non-empty answers equals `step`
/// - `complete` is true exactly when `step == 5`
#[derive(Debug, Clone)]
pub struct Wizard {
    transcript: Transcript,
    answers: AnswerSet,
    step: usize,
    complete: bool,
    epoch: u64,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Creates a wizard holding only the greeting.
    ///
    /// Call [`Wizard::opening_message`] to get the first question.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::with_greeting(GREETING_MESSAGE),
            answers: AnswerSet::new(),
            step: 0,
            complete: false,
            epoch: 0,
        }
    }

    /// The first question, scheduled for the current epoch.
    pub fn opening_message(&self) -> ScheduledMessage {
        ScheduledMessage::new(self.epoch, QUESTIONS[0].prompt, Pacing::Opening)
    }

    /// Records one answer.
    ///
    /// Whitespace-only input is a silent no-op, as is any input after the
    /// wizard has completed.
    pub fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        let value = raw_input.trim();
        if value.is_empty() || self.complete {
            return SubmitOutcome::Ignored;
        }

        let key = QUESTIONS[self.step].key;
        self.transcript.push(TranscriptEntry::user(value));
        self.answers.set(key, value.to_string());
        self.step += 1;

        let follow_up = match QUESTIONS.get(self.step) {
            Some(next) => ScheduledMessage::new(self.epoch, next.prompt, Pacing::FollowUp),
            None => {
                self.complete = true;
                ScheduledMessage::new(self.epoch, CLOSING_MESSAGE, Pacing::FollowUp)
            }
        };

        SubmitOutcome::Recorded { key, follow_up }
    }

    /// Appends a scheduled system entry. Returns false for stale messages.
    pub fn deliver(&mut self, message: &ScheduledMessage) -> bool {
        if message.epoch != self.epoch {
            return false;
        }
        self.transcript.push(TranscriptEntry::system(message.text.clone()));
        true
    }

    /// Returns to the greeting and invalidates every pending message.
    pub fn reset(&mut self) -> ScheduledMessage {
        self.transcript.restart(GREETING_MESSAGE);
        self.answers.clear();
        self.step = 0;
        self.complete = false;
        self.epoch += 1;
        self.opening_message()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&'static QuestionDescriptor> {
        QUESTIONS.get(self.step)
    }

    /// Key of the most recently recorded answer.
    pub fn last_captured(&self) -> Option<AnswerKey> {
        self.step.checked_sub(1).map(|i| QUESTIONS[i].key)
    }
}
