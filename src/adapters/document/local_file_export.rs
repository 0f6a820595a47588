//! Local Filesystem Export Adapter - Implementation of DocumentExporter.
//!
//! Writes each offered document into a single export directory. The brand
//! name flows into the filename unchanged except for characters that would
//! escape the directory. Names too long for the filesystem lose the middle of
//! the brand and keep their tail.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{DocumentExporter, ExportError, ExportReceipt, ExportedDocument};

const TEMP_SUFFIX: &str = ".tmp";

/// Common filesystem name limit, minus room for the temp sibling.
const MAX_FILENAME_BYTES: usize = 255 - TEMP_SUFFIX.len();

/// Bytes at the end of an over-long name that survive shortening.
const KEPT_TAIL_BYTES: usize = 32;

/// Exports documents as files under `base_path`.
///
/// Uses a write-to-temp-then-rename pattern so a crash never leaves a
/// half-written export behind. Re-exporting the same brand overwrites.
///
/// # Usage
///
/// ```rust,ignore
/// let exporter = LocalFileExporter::new("exports");
/// let receipt = exporter.offer(&document).await?;
/// println!("Saved to {}", receipt.location);
/// ```
#[derive(Debug, Clone)]
pub struct LocalFileExporter {
    base_path: PathBuf,
}

impl LocalFileExporter {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Replaces path separators and control characters with `_`.
    fn safe_filename(filename: &str) -> Result<String, ExportError> {
        let cleaned: String = filename
            .chars()
            .map(|c| match c {
                '/' | '\\' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();

        if cleaned.trim().is_empty() || cleaned == "." || cleaned == ".." {
            return Err(ExportError::InvalidFilename(filename.to_string()));
        }
        Ok(Self::shorten(cleaned))
    }

    /// Cuts the head of `name` so it fits [`MAX_FILENAME_BYTES`], keeping the tail.
    fn shorten(name: String) -> String {
        if name.len() <= MAX_FILENAME_BYTES {
            return name;
        }
        let tail_start = (name.len() - KEPT_TAIL_BYTES..=name.len())
            .find(|i| name.is_char_boundary(*i))
            .unwrap_or(name.len());
        let head_budget = MAX_FILENAME_BYTES - (name.len() - tail_start);
        let head_end = (0..=head_budget)
            .rev()
            .find(|i| name.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}{}", &name[..head_end], &name[tail_start..])
    }
}

#[async_trait]
impl DocumentExporter for LocalFileExporter {
    async fn offer(&self, document: &ExportedDocument) -> Result<ExportReceipt, ExportError> {
        let filename = Self::safe_filename(&document.filename)?;

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let final_path = self.base_path.join(&filename);
        let temp_path = self.base_path.join(format!("{}{}", filename, TEMP_SUFFIX));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(&document.content).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportError::io_error(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %final_path.display(), "Exported strategy document");

        Ok(ExportReceipt {
            location: final_path.display().to_string(),
            bytes_written: document.content.len(),
        })
    }
}
