//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Sessions are locked for the duration of each command; the generation
//! handler is the one exception and releases the lock across its network call.

pub mod handlers;
mod pacing;
mod views;

pub use handlers::{
    CloseSessionHandler, CopyDocumentHandler, ExportDocumentHandler, ExportDocumentResult,
    GenerateStrategyHandler, GenerateStrategyResult, GenerationOutcome, GetDocumentHandler,
    GetSessionHandler, RenderedDocument, ResetSessionHandler, StartSessionHandler,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
pub use pacing::MessagePacer;
pub use views::{CapturedAnswer, SessionView};
