//! GetDocumentHandler - renders the current document as notepad text.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

use super::super::find_session;

/// Rendered notepad text with its export filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub text: String,
    pub filename: String,
}

/// Handler for reading the rendered document.
pub struct GetDocumentHandler {
    store: Arc<dyn SessionStore>,
}

impl GetDocumentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<RenderedDocument, SessionError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;
        let session = handle.lock().await;
        let generated = session.require_document()?;

        Ok(RenderedDocument {
            text: generated.render(),
            filename: generated.export_filename(),
        })
    }
}
