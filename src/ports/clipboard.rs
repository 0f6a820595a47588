//! Clipboard Port - copying rendered text for the user.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::SessionId;

/// Port for placing text on a session's clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents for `session_id` with `text`.
    async fn copy_text(&self, session_id: SessionId, text: &str) -> Result<(), ClipboardError>;

    /// Drops whatever was copied for `session_id`.
    async fn forget(&self, session_id: SessionId);
}

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
