//! Request and response DTOs for strategy session endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{CapturedAnswer, SessionView};
use crate::domain::foundation::DomainError;
use crate::domain::strategy::GenerationPhase;
use crate::domain::wizard::{AnswerKey, AnswerSet, QuestionDescriptor, TranscriptEntry};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/sessions/:id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// The question awaiting an answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub key: AnswerKey,
    pub prompt: String,
    pub icon: String,
}

impl From<QuestionDescriptor> for QuestionResponse {
    fn from(q: QuestionDescriptor) -> Self {
        Self {
            key: q.key,
            prompt: q.prompt.to_string(),
            icon: q.icon.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CapturedResponse {
    pub key: AnswerKey,
    pub value: String,
}

impl From<CapturedAnswer> for CapturedResponse {
    fn from(c: CapturedAnswer) -> Self {
        Self {
            key: c.key,
            value: c.value,
        }
    }
}

/// Document renderer status.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStatusResponse {
    pub phase: GenerationPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub has_document: bool,
}

/// Full session state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub transcript: Vec<TranscriptEntry>,
    pub step: usize,
    pub total_steps: usize,
    pub is_complete: bool,
    pub current_question: Option<QuestionResponse>,
    pub captured: Option<CapturedResponse>,
    pub answers: AnswerSet,
    pub generation: GenerationStatusResponse,
    pub created_at: String,
}

impl From<SessionView> for SessionResponse {
    fn from(view: SessionView) -> Self {
        Self {
            session_id: view.id.to_string(),
            transcript: view.transcript,
            step: view.step,
            total_steps: view.total_steps,
            is_complete: view.is_complete,
            current_question: view.current_question.map(Into::into),
            captured: view.captured.map(Into::into),
            answers: view.answers,
            generation: GenerationStatusResponse {
                phase: view.phase,
                notice: view.notice,
                has_document: view.has_document,
            },
            created_at: view.created_at.to_rfc3339(),
        }
    }
}

/// Response to a submitted message.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitMessageResponse {
    /// Key the message was recorded under; absent when it was ignored.
    pub recorded: Option<AnswerKey>,
    pub session: SessionResponse,
}

/// Response to a completed generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// `generated`, or `discarded` when the session was reset meanwhile.
    pub outcome: String,
    pub session: SessionResponse,
}

/// Response to a clipboard copy.
#[derive(Debug, Clone, Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub bytes: usize,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details: None,
        }
    }
}
