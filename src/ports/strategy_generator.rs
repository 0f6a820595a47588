//! Strategy Generator Port - the outbound call to the generation service.
//!
//! The service receives the five collected answers and returns a structured
//! strategy document. Its model choice and prompt design live elsewhere; this
//! port only fixes the request/response contract.
//!
//! # Example
//!
//! ```ignore
//! let generator: Arc<dyn StrategyGenerator> = Arc::new(HttpStrategyGenerator::new(config)?);
//! let document = generator.generate(session.wizard().answers()).await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::strategy::StrategyDocument;
use crate::domain::wizard::AnswerSet;

/// Port for the content generation service.
///
/// # Contract
///
/// - exactly one outbound request per call, no retries
/// - any non-success status or transport problem is an error
/// - a success body is parsed leniently into a [`StrategyDocument`]
#[async_trait]
pub trait StrategyGenerator: Send + Sync {
    /// Generates a strategy document for the given answers.
    async fn generate(&self, answers: &AnswerSet) -> Result<StrategyDocument, GenerationError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Ways a generation call can fail. All of them surface as the same notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The service answered with a non-success status.
    #[error("generation service rejected the request with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// First part of the response body, for logs.
        body: String,
    },

    /// Request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// No answer within the configured bound.
    #[error("generation timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// Success status but the body is not a strategy document.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// HTTP status, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
