//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `KANTIFY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use kantify::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod corpus;
mod error;
mod rag;
mod server;
mod session;
mod storage;

pub use ai::AiConfig;
pub use corpus::CorpusConfig;
pub use error::{ConfigError, ValidationError};
pub use rag::RagConfig;
pub use server::{Environment, ServerConfig};
pub use session::{DilemmaSource, SessionConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults; only the language model key is required
/// unless the mock provider is selected.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Language model configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// RAG service configuration
    #[serde(default)]
    pub rag: RagConfig,

    /// Session storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Session behavior configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Corpus configuration
    #[serde(default)]
    pub corpus: CorpusConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KANTIFY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KANTIFY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `KANTIFY__RAG__BASE_URL=...` -> `rag.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("KANTIFY")
                    .prefix_separator("__")
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
        self.ai.validate()?;
        self.rag.validate()?;
        self.storage.validate()?;
        self.session.validate(self.rag.enabled)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
