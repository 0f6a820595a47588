//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Generation endpoint must be an http(s) URL")]
    InvalidEndpoint,

    #[error("Generation endpoint must use HTTPS in production")]
    EndpointMustBeHttps,

    #[error("Generation timeout must be between 1 and 600 seconds")]
    InvalidTimeout,

    #[error("Pacing delay exceeds maximum allowed ({max_ms} ms)")]
    PacingTooLong { max_ms: u64 },
}
