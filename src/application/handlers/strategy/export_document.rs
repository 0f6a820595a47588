//! ExportDocumentHandler - offers the rendered document as a text file.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::{DocumentExporter, ExportReceipt, ExportedDocument, SessionStore};

use super::super::find_session;

/// Result of an export.
#[derive(Debug, Clone)]
pub struct ExportDocumentResult {
    /// Bytes and filename, identical to what the exporter received.
    pub document: ExportedDocument,
    pub receipt: ExportReceipt,
}

/// Handler for exporting documents.
pub struct ExportDocumentHandler {
    store: Arc<dyn SessionStore>,
    exporter: Arc<dyn DocumentExporter>,
}

impl ExportDocumentHandler {
    pub fn new(store: Arc<dyn SessionStore>, exporter: Arc<dyn DocumentExporter>) -> Self {
        Self { store, exporter }
    }

    /// Renders the current document and hands it to the exporter.
    ///
    /// The export is byte-identical to the on-screen text.
    pub async fn handle(&self, session_id: SessionId) -> Result<ExportDocumentResult, DomainError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;
        let document = {
            let session = handle.lock().await;
            let generated = session.require_document()?;
            ExportedDocument::plain_text(generated.render(), generated.export_filename())
        };

        let receipt = self.exporter.offer(&document).await.map_err(|e| {
            tracing::warn!(%session_id, error = %e, "Export failed");
            DomainError::new(ErrorCode::ExportFailed, e.to_string())
        })?;
        tracing::info!(%session_id, location = %receipt.location, "Strategy exported");

        Ok(ExportDocumentResult { document, receipt })
    }
}
