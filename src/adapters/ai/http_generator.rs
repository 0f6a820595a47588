//! HTTP Strategy Generator - calls the remote generation endpoint.
//!
//! Sends the five answers as a flat JSON object in a single POST and parses
//! the JSON reply into a [`StrategyDocument`]. There are no retries: a failed
//! call is reported once and the user decides whether to try again.
//!
//! # Configuration
//!
//! ```ignore
//! let generator = HttpStrategyGenerator::new(
//!     HttpGeneratorConfig::new("https://gen.example.com/api/generate")
//!         .with_api_key("sk-...")
//!         .with_timeout(Duration::from_secs(120)),
//! )?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::domain::strategy::StrategyDocument;
use crate::domain::wizard::AnswerSet;
use crate::ports::{GenerationError, StrategyGenerator};

/// Longest slice of an error body kept for logs.
const MAX_ERROR_BODY: usize = 512;

/// Configuration for the HTTP generator.
#[derive(Debug, Clone)]
pub struct HttpGeneratorConfig {
    /// Endpoint receiving the POST.
    pub endpoint: String,
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpGeneratorConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the bearer token. Empty keys are ignored.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = (!key.is_empty()).then(|| Secret::new(key));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

impl From<&GenerationConfig> for HttpGeneratorConfig {
    fn from(config: &GenerationConfig) -> Self {
        let base = Self::new(config.endpoint.clone()).with_timeout(config.timeout());
        match &config.api_key {
            Some(key) => base.with_api_key(key.clone()),
            None => base,
        }
    }
}

/// Generation service reached over HTTP.
pub struct HttpStrategyGenerator {
    config: HttpGeneratorConfig,
    client: Client,
}

impl HttpStrategyGenerator {
    /// Creates the generator and its HTTP client.
    pub fn new(config: HttpGeneratorConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else if e.is_connect() {
            GenerationError::network(format!("Connection failed: {}", e))
        } else {
            GenerationError::network(e.to_string())
        }
    }
}

#[async_trait]
impl StrategyGenerator for HttpStrategyGenerator {
    async fn generate(&self, answers: &AnswerSet) -> Result<StrategyDocument, GenerationError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(answers);
        if let Some(key) = self.config.api_key() {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            tracing::warn!(status = status.as_u16(), "Generation service returned error status");
            return Err(GenerationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerationError::invalid_response(e.to_string()))?;

        StrategyDocument::from_value(value)
            .map_err(|e| GenerationError::invalid_response(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn acme() -> AnswerSet {
        AnswerSet {
            brand: "Acme".into(),
            niche: "Coffee".into(),
            audience: "Urban professionals".into(),
            platform: "Instagram".into(),
            goal: "Awareness".into(),
        }
    }

    /// Serves `router` on an ephemeral port and returns the generate URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/generate", addr)
    }

    fn generator_for(endpoint: String) -> HttpStrategyGenerator {
        HttpStrategyGenerator::new(
            HttpGeneratorConfig::new(endpoint)
                .with_api_key("sk-test")
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = HttpGeneratorConfig::new("http://localhost:3000/api/generate");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn empty_api_key_is_ignored() {
        let config = HttpGeneratorConfig::new("http://x").with_api_key("");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn config_from_generation_config() {
        let gen = GenerationConfig {
            endpoint: "https://gen.example.com".to_string(),
            api_key: Some("secret".to_string()),
            timeout_secs: 30,
            ..Default::default()
        };
        let config = HttpGeneratorConfig::from(&gen);
        assert_eq!(config.endpoint, "https://gen.example.com");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = HttpGeneratorConfig::new("http://x").with_api_key("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let generator = HttpStrategyGenerator::new(
            HttpGeneratorConfig::new("http://127.0.0.1:1/api/generate")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = generator.generate(&AnswerSet::new()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Network(_) | GenerationError::Timeout { .. }
        ));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn success_body_is_parsed_into_document() {
        let router = Router::new().route(
            "/api/generate",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "strategy_overview": format!("{} for {}", auth, body["brand"].as_str().unwrap_or_default()),
                    "content_calendar": [ { "day": 1, "theme": "Origin story" } ],
                    "hashtag_strategy": null
                }))
            }),
        );
        let generator = generator_for(serve(router).await);

        let doc = generator.generate(&acme()).await.unwrap();

        assert_eq!(doc.overview, "Bearer sk-test for Acme");
        assert_eq!(doc.calendar[0].day, "1");
        assert!(doc.hashtags.branded.is_empty());
    }

    #[tokio::test]
    async fn error_status_is_rejected_with_truncated_body() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async { (StatusCode::UNAUTHORIZED, "é".repeat(400)) }),
        );
        let generator = generator_for(serve(router).await);

        let err = generator.generate(&acme()).await.unwrap_err();

        match err {
            GenerationError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body.len(), MAX_ERROR_BODY);
                assert!(body.chars().all(|c| c == 'é'));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_success_is_invalid_response() {
        let router = Router::new().route("/api/generate", post(|| async { "not a strategy" }));
        let generator = generator_for(serve(router).await);

        let err = generator.generate(&acme()).await.unwrap_err();

        assert!(matches!(err, GenerationError::InvalidResponse(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn json_of_wrong_shape_is_invalid_response() {
        let router = Router::new().route("/api/generate", post(|| async { Json(json!([1, 2, 3])) }));
        let generator = generator_for(serve(router).await);

        let err = generator.generate(&acme()).await.unwrap_err();

        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }
}
