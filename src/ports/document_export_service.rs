//! Document Export Port - offering a rendered strategy as a file.
//!
//! The rendered notepad text is wrapped in an [`ExportedDocument`] and handed
//! to a [`DocumentExporter`], which makes it available to the user (writes it
//! to an export directory, for the local adapter). The HTTP layer also streams
//! the same bytes back as a download.

use async_trait::async_trait;
use thiserror::Error;

/// Port for offering an exported document to the user.
///
/// # Contract
///
/// Implementations must:
/// - store or deliver `content` byte for byte
/// - never interpret `filename` as a path
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Offers the document; returns where it ended up.
    async fn offer(&self, document: &ExportedDocument) -> Result<ExportReceipt, ExportError>;
}

/// MIME type of every export.
pub const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// Exported document with content and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
}

impl ExportedDocument {
    /// Wraps rendered text as a plain text export.
    pub fn plain_text(text: String, filename: impl Into<String>) -> Self {
        Self {
            content: text.into_bytes(),
            content_type: PLAIN_TEXT.to_string(),
            filename: filename.into(),
        }
    }
}

/// Where an offered document ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub location: String,
    pub bytes_written: usize,
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Filename cannot be used.
    #[error("Invalid export filename: {0}")]
    InvalidFilename(String),

    /// I/O error during export.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}
