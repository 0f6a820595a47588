//! Declarative question table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which an answer is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    Brand,
    Niche,
    Audience,
    Platform,
    Goal,
}

impl AnswerKey {
    /// All keys in question order.
    pub const ALL: [AnswerKey; 5] = [
        AnswerKey::Brand,
        AnswerKey::Niche,
        AnswerKey::Audience,
        AnswerKey::Platform,
        AnswerKey::Goal,
    ];

    /// Wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::Brand => "brand",
            AnswerKey::Niche => "niche",
            AnswerKey::Audience => "audience",
            AnswerKey::Platform => "platform",
            AnswerKey::Goal => "goal",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scripted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionDescriptor {
    /// Answer key this question fills.
    pub key: AnswerKey,
    /// Prompt shown in the transcript.
    pub prompt: &'static str,
    /// Topical icon tag shown next to the input.
    pub icon: &'static str,
}

/// The wizard script, consumed by step index.
pub const QUESTIONS: [QuestionDescriptor; 5] = [
    QuestionDescriptor {
        key: AnswerKey::Brand,
        prompt: "What's your brand name?",
        icon: "campaign",
    },
    QuestionDescriptor {
        key: AnswerKey::Niche,
        prompt: "What niche are you in?",
        icon: "category",
    },
    QuestionDescriptor {
        key: AnswerKey::Audience,
        prompt: "Who is your target audience?",
        icon: "groups",
    },
    QuestionDescriptor {
        key: AnswerKey::Platform,
        prompt: "Which platform are we focusing on?",
        icon: "share",
    },
    QuestionDescriptor {
        key: AnswerKey::Goal,
        prompt: "What is your primary goal?",
        icon: "flag",
    },
];
