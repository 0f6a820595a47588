//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - strategy generators (HTTP service, mock)
//! - `document` - file export and clipboard
//! - `storage` - live session registry
//! - `http` - REST API

pub mod ai;
pub mod document;
pub mod http;
pub mod storage;

pub use ai::{HttpGeneratorConfig, HttpStrategyGenerator, MockStrategyGenerator};
pub use document::{InMemoryClipboard, LocalFileExporter};
pub use storage::InMemorySessionStore;
