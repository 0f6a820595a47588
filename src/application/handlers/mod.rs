//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod strategy;
pub mod wizard;

pub use strategy::{
    CopyDocumentHandler, ExportDocumentHandler, ExportDocumentResult, GenerateStrategyHandler,
    GenerateStrategyResult, GenerationOutcome, GetDocumentHandler, RenderedDocument,
};
pub use wizard::{
    CloseSessionHandler, GetSessionHandler, ResetSessionHandler, StartSessionHandler,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::{SessionStore, SharedSession};

/// Looks up a live session or reports it missing.
pub(crate) async fn find_session(
    store: &dyn SessionStore,
    session_id: SessionId,
) -> Result<SharedSession, SessionError> {
    store
        .get(session_id)
        .await
        .ok_or_else(|| SessionError::not_found(session_id))
}
