//! CopyDocumentHandler - puts the rendered document on the clipboard.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{Clipboard, SessionStore};

use super::super::find_session;

/// Handler for copying documents.
pub struct CopyDocumentHandler {
    store: Arc<dyn SessionStore>,
    clipboard: Arc<dyn Clipboard>,
}

impl CopyDocumentHandler {
    pub fn new(store: Arc<dyn SessionStore>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { store, clipboard }
    }

    /// Copies the exact on-screen text and returns it.
    pub async fn handle(&self, session_id: SessionId) -> Result<String, DomainError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;
        let text = handle.lock().await.require_document()?.render();

        self.clipboard
            .copy_text(session_id, &text)
            .await
            .map_err(|e| DomainError::new(ErrorCode::ClipboardUnavailable, e.to_string()))?;

        Ok(text)
    }
}
