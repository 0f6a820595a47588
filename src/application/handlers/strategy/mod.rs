//! Strategy generation and document output handlers.

mod copy_document;
mod export_document;
mod generate_strategy;
mod get_document;

pub use copy_document::CopyDocumentHandler;
pub use export_document::{ExportDocumentHandler, ExportDocumentResult};
pub use generate_strategy::{GenerateStrategyHandler, GenerateStrategyResult, GenerationOutcome};
pub use get_document::{GetDocumentHandler, RenderedDocument};
