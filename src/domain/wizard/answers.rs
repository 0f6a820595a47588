//! Answer set collected by the wizard.

use serde::{Deserialize, Serialize};

use super::question::AnswerKey;

/// The five collected attributes.
///
/// Serializes to the flat `{brand, niche, audience, platform, goal}` payload
/// the generation service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub brand: String,
    pub niche: String,
    pub audience: String,
    pub platform: String,
    pub goal: String,
}

impl AnswerSet {
    /// Creates an all-empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value recorded under `key`.
    pub fn get(&self, key: AnswerKey) -> &str {
        match key {
            AnswerKey::Brand => &self.brand,
            AnswerKey::Niche => &self.niche,
            AnswerKey::Audience => &self.audience,
            AnswerKey::Platform => &self.platform,
            AnswerKey::Goal => &self.goal,
        }
    }

    pub(crate) fn set(&mut self, key: AnswerKey, value: String) {
        let slot = match key {
            AnswerKey::Brand => &mut self.brand,
            AnswerKey::Niche => &mut self.niche,
            AnswerKey::Audience => &mut self.audience,
            AnswerKey::Platform => &mut self.platform,
            AnswerKey::Goal => &mut self.goal,
        };
        *slot = value;
    }

    /// Number of non-empty values.
    pub fn answered_count(&self) -> usize {
        AnswerKey::ALL
            .iter()
            .filter(|key| !self.get(**key).is_empty())
            .count()
    }

    /// True when every key holds a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == AnswerKey::ALL.len()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
