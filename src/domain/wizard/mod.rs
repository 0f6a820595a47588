//! Wizard module - the fixed five-question intake flow.
//!
//! Questions are asked strictly in declared order. Each non-empty answer is
//! recorded under its key, appended to the transcript, and advances the step.
//! System follow-ups are returned as [`ScheduledMessage`]s so the caller can
//! deliver them after a pacing delay, or drop them if the wizard was reset.

mod answers;
mod question;
mod transcript;
mod wizard;

pub use answers::AnswerSet;
pub use question::{AnswerKey, QuestionDescriptor, QUESTIONS};
pub use transcript::{Transcript, TranscriptEntry};
pub use wizard::{
    Pacing, ScheduledMessage, SubmitOutcome, Wizard, CLOSING_MESSAGE, GREETING_MESSAGE,
};
