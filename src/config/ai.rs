//! Language model configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Language model configuration
///
/// Any OpenAI-compatible chat completions endpoint works. The defaults
/// target Gemini's compatibility endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key for the endpoint
    pub api_key: Option<Secret<String>>,

    /// Base URL without the `/chat/completions` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Name reported in logs
    #[serde(default = "default_provider_name")]
    pub provider_name: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Use the offline mock provider instead of a real endpoint
    #[serde(default)]
    pub mock: bool,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate language model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mock {
            return Ok(());
        }
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("KANTIFY__AI__API_KEY"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("ai.base_url"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("KANTIFY__AI__MODEL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            provider_name: default_provider_name(),
            timeout_secs: default_timeout(),
            mock: false,
        }
    }
}

pub(super) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_provider_name() -> String {
    "gemini".to_string()
}

fn default_timeout() -> u64 {
    120
}
