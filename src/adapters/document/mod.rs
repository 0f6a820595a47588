//! Document adapters - where rendered strategies go.
//!
//! - `LocalFileExporter` - writes exports into a local directory
//! - `InMemoryClipboard` - per-session clipboard held in memory

mod in_memory_clipboard;
mod local_file_export;

pub use in_memory_clipboard::InMemoryClipboard;
pub use local_file_export::LocalFileExporter;
