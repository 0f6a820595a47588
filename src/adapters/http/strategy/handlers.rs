//! HTTP handlers for strategy session endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CloseSessionHandler, CopyDocumentHandler, ExportDocumentHandler, GenerateStrategyHandler,
    GenerationOutcome, GetDocumentHandler, GetSessionHandler, MessagePacer, ResetSessionHandler,
    StartSessionHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::strategy::FAILURE_NOTICE;
use crate::ports::{Clipboard, DocumentExporter, SessionStore, StrategyGenerator, PLAIN_TEXT};

use super::dto::{
    CopyResponse, ErrorResponse, GenerateResponse, SessionResponse, SubmitMessageRequest,
    SubmitMessageResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct StrategyAppState {
    pub store: Arc<dyn SessionStore>,
    pub generator: Arc<dyn StrategyGenerator>,
    pub exporter: Arc<dyn DocumentExporter>,
    pub clipboard: Arc<dyn Clipboard>,
    pub pacer: MessagePacer,
    pub generation_timeout: Duration,
}

impl StrategyAppState {
    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.store.clone(), self.pacer.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.store.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(self.store.clone(), self.pacer.clone())
    }

    pub fn reset_session_handler(&self) -> ResetSessionHandler {
        ResetSessionHandler::new(self.store.clone(), self.pacer.clone())
    }

    pub fn close_session_handler(&self) -> CloseSessionHandler {
        CloseSessionHandler::new(self.store.clone(), self.pacer.clone(), self.clipboard.clone())
    }

    pub fn generate_strategy_handler(&self) -> GenerateStrategyHandler {
        GenerateStrategyHandler::new(
            self.store.clone(),
            self.generator.clone(),
            self.generation_timeout,
        )
    }

    pub fn get_document_handler(&self) -> GetDocumentHandler {
        GetDocumentHandler::new(self.store.clone())
    }

    pub fn export_document_handler(&self) -> ExportDocumentHandler {
        ExportDocumentHandler::new(self.store.clone(), self.exporter.clone())
    }

    pub fn copy_document_handler(&self) -> CopyDocumentHandler {
        CopyDocumentHandler::new(self.store.clone(), self.clipboard.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a new session
pub async fn start_session(State(state): State<StrategyAppState>) -> Response {
    let view = state.start_session_handler().handle().await;
    (StatusCode::CREATED, Json(SessionResponse::from(view))).into_response()
}

/// GET /api/sessions/:id - Current session state
pub async fn get_session(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_session_handler().handle(session_id).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_domain_error(e.into()),
    }
}

/// POST /api/sessions/:id/messages - Submit one answer
pub async fn submit_message(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitMessageRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        text: req.text,
    };

    match state.submit_answer_handler().handle(cmd).await {
        Ok(result) => {
            let response = SubmitMessageResponse {
                recorded: result.recorded,
                session: result.view.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e.into()),
    }
}

/// POST /api/sessions/:id/reset - Start over
pub async fn reset_session(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.reset_session_handler().handle(session_id).await {
        Ok(view) => (StatusCode::OK, Json(SessionResponse::from(view))).into_response(),
        Err(e) => handle_domain_error(e.into()),
    }
}

/// DELETE /api/sessions/:id - Close a session
pub async fn close_session(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.close_session_handler().handle(session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_domain_error(e.into()),
    }
}

/// POST /api/sessions/:id/generate - Generate the strategy document
pub async fn generate_strategy(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let result = match state.generate_strategy_handler().handle(session_id).await {
        Ok(result) => result,
        Err(e) => return handle_domain_error(e.into()),
    };

    let session = SessionResponse::from(result.view);
    let outcome = match result.outcome {
        GenerationOutcome::Generated => "generated",
        GenerationOutcome::Discarded => "discarded",
        GenerationOutcome::Failed(_) => {
            let body = ErrorResponse::from(&DomainError::new(
                ErrorCode::GenerationFailed,
                FAILURE_NOTICE,
            ))
            .with_details(serde_json::json!({ "session": session }));
            return (StatusCode::BAD_GATEWAY, Json(body)).into_response();
        }
    };

    let response = GenerateResponse {
        outcome: outcome.to_string(),
        session,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/sessions/:id/document - Rendered notepad text
pub async fn get_document(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_document_handler().handle(session_id).await {
        Ok(rendered) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(PLAIN_TEXT))],
            rendered.text,
        )
            .into_response(),
        Err(e) => handle_domain_error(e.into()),
    }
}

/// GET /api/sessions/:id/document/export - Download as `<brand>_Content_Strategy.txt`
pub async fn export_document(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.export_document_handler().handle(session_id).await {
        Ok(result) => {
            let document = result.document;
            let content_type = HeaderValue::from_str(&document.content_type)
                .unwrap_or_else(|_| HeaderValue::from_static(PLAIN_TEXT));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type),
                    (
                        header::CONTENT_DISPOSITION,
                        content_disposition(&document.filename),
                    ),
                ],
                document.content,
            )
                .into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/sessions/:id/document/copy - Copy the rendered text
pub async fn copy_document(
    State(state): State<StrategyAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.copy_document_handler().handle(session_id).await {
        Ok(text) => {
            let response = CopyResponse {
                bytes: text.len(),
                text,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid session ID")),
        )
            .into_response()
    })
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987 UTF-8 name.
fn content_disposition(filename: &str) -> HeaderValue {
    let fallback: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    let mut encoded = String::with_capacity(filename.len());
    for byte in filename.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound | ErrorCode::DocumentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::WizardIncomplete
        | ErrorCode::GenerationInProgress => StatusCode::CONFLICT,
        ErrorCode::GenerationFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::ExportFailed | ErrorCode::ClipboardUnavailable | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, message = %error.message, "Request failed");
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}
