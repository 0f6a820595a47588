//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONTENT_STRATEGIST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use content_strategist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod export;
mod generation;
mod pacing;
mod server;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use generation::{GenerationConfig, GeneratorKind};
pub use pacing::PacingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation service configuration (endpoint, key, timeout)
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Conversational pacing delays
    #[serde(default)]
    pub pacing: PacingConfig,

    /// File export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONTENT_STRATEGIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONTENT_STRATEGIST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONTENT_STRATEGIST__GENERATION__ENDPOINT=...` -> `generation.endpoint = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTENT_STRATEGIST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.generation.validate(&self.server.environment)?;
        self.pacing.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
