//! Strategy generator adapters.
//!
//! - `HttpStrategyGenerator` - remote generation endpoint over HTTP
//! - `MockStrategyGenerator` - configurable mock for tests and offline runs

mod http_generator;
mod mock_generator;

pub use http_generator::{HttpGeneratorConfig, HttpStrategyGenerator};
pub use mock_generator::{sample_document, MockStrategyGenerator};
