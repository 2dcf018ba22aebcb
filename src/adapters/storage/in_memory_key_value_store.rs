//! In-memory Key-Value Store Adapter
//!
//! Keeps values in a map for tests and development. Nothing survives a
//! restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{KeyValueError, KeyValueStore};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (for testing)
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    /// Returns true if nothing is stored (for testing)
    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    /// Returns true if `key` is stored (for testing)
    pub async fn contains(&self, key: &str) -> bool {
        self.values.read().await.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        if key.is_empty() {
            return Err(KeyValueError::InvalidKey(key.to_string()));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_load_remove_cycle() {
        let store = InMemoryKeyValueStore::new();

        store.save("k", "v").await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), Some("v".to_string()));
        assert!(store.contains("k").await);

        store.remove("k").await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let store = InMemoryKeyValueStore::new();
        let clone = store.clone();

        store.save("k", "v").await.unwrap();

        assert_eq!(clone.len().await, 1);
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let store = InMemoryKeyValueStore::new();
        assert!(matches!(
            store.save("", "v").await,
            Err(KeyValueError::InvalidKey(_))
        ));
    }
}
