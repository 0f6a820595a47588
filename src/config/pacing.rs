//! Conversational pacing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_DELAY_MS: u64 = 10_000;

/// Delays applied before scheduled system messages appear.
///
/// Zero disables pacing.
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Delay before the first question after start or reset
    #[serde(default = "default_first_question_delay")]
    pub first_question_delay_ms: u64,

    /// Delay before follow-up questions and the closing message
    #[serde(default = "default_follow_up_delay")]
    pub follow_up_delay_ms: u64,
}

impl PacingConfig {
    /// No delays at all.
    pub fn immediate() -> Self {
        Self {
            first_question_delay_ms: 0,
            follow_up_delay_ms: 0,
        }
    }

    pub fn first_question_delay(&self) -> Duration {
        Duration::from_millis(self.first_question_delay_ms)
    }

    pub fn follow_up_delay(&self) -> Duration {
        Duration::from_millis(self.follow_up_delay_ms)
    }

    /// Validate pacing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_question_delay_ms > MAX_DELAY_MS || self.follow_up_delay_ms > MAX_DELAY_MS {
            return Err(ValidationError::PacingTooLong {
                max_ms: MAX_DELAY_MS,
            });
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            first_question_delay_ms: default_first_question_delay(),
            follow_up_delay_ms: default_follow_up_delay(),
        }
    }
}

fn default_first_question_delay() -> u64 {
    1000
}

fn default_follow_up_delay() -> u64 {
    600
}
