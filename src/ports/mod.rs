//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StrategyGenerator` - outbound call to the generation service
//! - `DocumentExporter` - offers a rendered document as a file
//! - `Clipboard` - copies rendered text for the user
//! - `SessionStore` - keeps live sessions between requests

mod clipboard;
mod document_export_service;
mod session_store;
mod strategy_generator;

pub use clipboard::{Clipboard, ClipboardError};
pub use document_export_service::{
    DocumentExporter, ExportError, ExportReceipt, ExportedDocument, PLAIN_TEXT,
};
pub use session_store::{SessionStore, SharedSession};
pub use strategy_generator::{GenerationError, StrategyGenerator};
