//! RAG service configuration

use serde::Deserialize;
use std::time::Duration;

use crate::adapters::rag::DEFAULT_RAG_TIMEOUT;

use super::ai::is_http_url;
use super::error::ValidationError;

/// RAG service configuration
///
/// The request timeout is not configurable; every call aborts after
/// [`DEFAULT_RAG_TIMEOUT`].
#[derive(Debug, Clone, Deserialize)]
pub struct RagConfig {
    /// Whether the RAG service is available at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base URL of the service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl RagConfig {
    /// Abort-after timeout for RAG requests
    pub fn timeout(&self) -> Duration {
        DEFAULT_RAG_TIMEOUT
    }

    /// Validate RAG configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("rag.base_url"));
        }
        Ok(())
    }
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_base_url(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rag_config_defaults() {
        let config = RagConfig::default();
        assert!(config.enabled);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_ignores_configured_value() {
        let config: RagConfig = serde_json::from_value(serde_json::json!({
            "base_url": "http://rag:8000",
            "timeout_secs": 5
        }))
        .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = RagConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_skips_validation() {
        let config = RagConfig {
            enabled: false,
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
