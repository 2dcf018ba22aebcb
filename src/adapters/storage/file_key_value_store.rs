//! File-based Key-Value Store Adapter
//!
//! Stores each key as its own file under a data directory. Keys are used
//! verbatim as file names, so only ASCII letters, digits, `-` and `_` are
//! accepted.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueError, KeyValueStore};

const VALUE_EXTENSION: &str = "json";

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    fn value_path(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.{}", key, VALUE_EXTENSION)))
    }

    /// Ensure the data directory exists
    async fn ensure_dir(&self) -> Result<(), KeyValueError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))
    }
}

fn validate_key(key: &str) -> Result<(), KeyValueError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(KeyValueError::InvalidKey(key.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn load(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueError::IoError(e.to_string())),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let path = self.value_path(key)?;
        self.ensure_dir().await?;

        // Write to a sibling file first so readers never see a partial value
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let path = self.value_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KeyValueError::IoError(e.to_string())),
        }
    }
}
