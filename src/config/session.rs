//! Session behavior configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::SessionSettings;

use super::error::ValidationError;

const MAX_AUTO_ADVANCE_DELAY_MS: u64 = 60_000;

/// Session behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Remote generator used for new dilemmas
    #[serde(default)]
    pub dilemma_source: DilemmaSource,

    /// Fetch a remote dilemma for an unanswered first corpus entry
    #[serde(default)]
    pub initial_remote_dilemma: bool,

    /// Show a generated follow-up after each successful reflection
    #[serde(default)]
    pub auto_advance: bool,

    /// Delay before the follow-up is shown, in milliseconds
    #[serde(default = "default_auto_advance_delay")]
    pub auto_advance_delay_ms: u64,
}

/// Remote dilemma generator
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DilemmaSource {
    #[default]
    Rag,
    Llm,
}

impl SessionConfig {
    /// Get the follow-up delay as Duration
    pub fn auto_advance_delay(&self) -> Duration {
        Duration::from_millis(self.auto_advance_delay_ms)
    }

    /// Settings consumed by the session runtime
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            initial_remote_dilemma: self.initial_remote_dilemma,
            auto_advance: self.auto_advance,
            auto_advance_delay: self.auto_advance_delay(),
        }
    }

    /// Validate session configuration
    ///
    /// `rag_enabled` is the RAG section's switch; the RAG source needs it.
    pub fn validate(&self, rag_enabled: bool) -> Result<(), ValidationError> {
        if self.auto_advance_delay_ms > MAX_AUTO_ADVANCE_DELAY_MS {
            return Err(ValidationError::AutoAdvanceDelayTooLarge);
        }
        if self.dilemma_source == DilemmaSource::Rag && !rag_enabled {
            return Err(ValidationError::RagSourceDisabled);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dilemma_source: DilemmaSource::default(),
            initial_remote_dilemma: false,
            auto_advance: false,
            auto_advance_delay_ms: default_auto_advance_delay(),
        }
    }
}

fn default_auto_advance_delay() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.dilemma_source, DilemmaSource::Rag);
        assert!(!config.auto_advance);
        assert_eq!(config.auto_advance_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_settings_mirror_config() {
        let config = SessionConfig {
            auto_advance: true,
            auto_advance_delay_ms: 10,
            ..Default::default()
        };
        let settings = config.settings();
        assert!(settings.auto_advance);
        assert!(!settings.initial_remote_dilemma);
        assert_eq!(settings.auto_advance_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_rag_source_requires_rag() {
        let config = SessionConfig::default();
        assert!(config.validate(true).is_ok());
        assert!(matches!(
            config.validate(false),
            Err(ValidationError::RagSourceDisabled)
        ));

        let config = SessionConfig {
            dilemma_source: DilemmaSource::Llm,
            ..Default::default()
        };
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_delay_upper_bound() {
        let config = SessionConfig {
            auto_advance_delay_ms: 60_001,
            ..Default::default()
        };
        assert!(config.validate(true).is_err());
    }
}
