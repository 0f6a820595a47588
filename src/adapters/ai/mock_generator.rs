//! Mock Strategy Generator for tests and offline runs.
//!
//! # Features
//!
//! - Pre-configured documents or errors, consumed in order
//! - A canned sample document once the queue is empty
//! - Simulated latency, or a [`Notify`] gate that holds calls until released
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockStrategyGenerator::new()
//!     .with_error(GenerationError::Rejected { status: 401, body: String::new() })
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

use crate::domain::strategy::{CalendarEntry, Caption, HashtagPlan, PostIdea, StrategyDocument};
use crate::domain::wizard::AnswerSet;
use crate::ports::{GenerationError, StrategyGenerator};

/// Mock generator, cheap to clone; clones share queue and call history.
#[derive(Debug, Clone, Default)]
pub struct MockStrategyGenerator {
    responses: Arc<Mutex<VecDeque<Result<StrategyDocument, GenerationError>>>>,
    calls: Arc<Mutex<Vec<AnswerSet>>>,
    delay: Duration,
    gate: Option<Arc<Notify>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockStrategyGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful document.
    pub fn with_document(self, document: StrategyDocument) -> Self {
        lock(&self.responses).push_back(Ok(document));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Holds every call until `gate` is notified once per call.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Answers received, in call order.
    pub fn calls(&self) -> Vec<AnswerSet> {
        lock(&self.calls).clone()
    }

    fn next_response(&self, answers: &AnswerSet) -> Result<StrategyDocument, GenerationError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(sample_document(answers)))
    }
}

#[async_trait]
impl StrategyGenerator for MockStrategyGenerator {
    async fn generate(&self, answers: &AnswerSet) -> Result<StrategyDocument, GenerationError> {
        lock(&self.calls).push(answers.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response(answers)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Small but complete document built from the answers.
pub fn sample_document(answers: &AnswerSet) -> StrategyDocument {
    let brand_tag = answers.brand.split_whitespace().collect::<String>();
    StrategyDocument {
        overview: format!(
            "{} will grow {} on {} by speaking directly to {}.",
            answers.brand, answers.goal, answers.platform, answers.audience
        ),
        calendar: vec![
            CalendarEntry {
                day: "Day 1".to_string(),
                theme: format!("Introduce {}", answers.brand),
                content_type: "Reel".to_string(),
            },
            CalendarEntry {
                day: "Day 2".to_string(),
                theme: format!("Behind the scenes in {}", answers.niche),
                content_type: "Carousel".to_string(),
            },
        ],
        post_ideas: vec![PostIdea {
            title: format!("Why {} love {}", answers.audience, answers.brand),
            hook: "You have been doing this wrong.".to_string(),
        }],
        captions: vec![Caption {
            kind: "Engagement".to_string(),
            content: format!("What does {} mean to you? Tell us below.", answers.niche),
        }],
        hashtags: HashtagPlan {
            broad: vec!["marketing".to_string()],
            niche: vec![answers.niche.split_whitespace().collect()],
            branded: if brand_tag.is_empty() {
                Vec::new()
            } else {
                vec![brand_tag]
            },
        },
        ..Default::default()
    }
}
