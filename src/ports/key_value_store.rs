//! Key-Value Store Port - Interface for persisting session data.
//!
//! Values are opaque strings. Callers own serialization; the store only
//! guarantees that a saved value is returned unchanged by `load` until it
//! is overwritten or removed.

use async_trait::async_trait;

/// Errors that can occur during key-value operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for string-keyed persistence
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    async fn load(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Store `value` under `key`, replacing any previous value
    async fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove the value stored under `key`
    ///
    /// Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}
