//! Append-only chat transcript.

use serde::{Deserialize, Serialize};

/// One chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub is_user: bool,
}

impl TranscriptEntry {
    /// Creates a system (assistant) entry.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }

    /// Creates a user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }
}

/// Ordered chat log.
///
/// Entries are never mutated or removed; the only way back is
/// [`Transcript::restart`], which leaves a single greeting entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Creates a transcript holding only the greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        Self {
            entries: vec![TranscriptEntry::system(greeting)],
        }
    }

    pub(crate) fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn restart(&mut self, greeting: &str) {
        self.entries.clear();
        self.entries.push(TranscriptEntry::system(greeting));
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}
