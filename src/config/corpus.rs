//! Corpus configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::dilemma::{Corpus, CorpusError};

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorpusConfig {
    /// JSON file replacing the bundled corpus
    pub path: Option<PathBuf>,
}

impl CorpusConfig {
    /// Loads the configured corpus, or the bundled one if no path is set
    pub fn load(&self) -> Result<Corpus, CorpusError> {
        match &self.path {
            Some(path) => Corpus::from_path(path),
            None => Corpus::bundled(),
        }
    }
}
