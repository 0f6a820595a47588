//! Generation service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Generation service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Which generator backs the service
    #[serde(default)]
    pub provider: GeneratorKind,

    /// Full URL of the generation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bearer token sent to the endpoint, if any
    pub api_key: Option<String>,

    /// Upper bound on one generation call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Generator backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Remote HTTP generation service
    #[default]
    Http,
    /// Built-in canned document, for local development
    Mock,
}

impl GenerationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate generation configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }

        if self.provider == GeneratorKind::Mock {
            return Ok(());
        }

        let is_https = self.endpoint.starts_with("https://");
        if !is_https && !self.endpoint.starts_with("http://") {
            return Err(ValidationError::InvalidEndpoint);
        }
        if environment.is_strict() && !is_https {
            return Err(ValidationError::EndpointMustBeHttps);
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: GeneratorKind::default(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:3000/api/generate".to_string()
}

fn default_timeout() -> u64 {
    120
}
