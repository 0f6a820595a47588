//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, ValidationError};

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session was not found.
    NotFound(SessionId),
    /// Generation requested before all answers were collected.
    WizardIncomplete { answered: usize, total: usize },
    /// A generation call is already outstanding.
    GenerationInProgress,
    /// No document has been generated yet.
    NoDocument,
    /// Invalid state for operation.
    InvalidState(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::WizardIncomplete { .. } => ErrorCode::WizardIncomplete,
            SessionError::GenerationInProgress => ErrorCode::GenerationInProgress,
            SessionError::NoDocument => ErrorCode::DocumentNotFound,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::WizardIncomplete { answered, total } => {
                format!("Wizard incomplete: {} of {} answers collected", answered, total)
            }
            SessionError::GenerationInProgress => {
                "A strategy is already being generated".to_string()
            }
            SessionError::NoDocument => "No strategy has been generated yet".to_string(),
            SessionError::InvalidState(msg) => format!("Invalid state: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidState(err.to_string())
    }
}
