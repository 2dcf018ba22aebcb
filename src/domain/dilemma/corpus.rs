//! Static dilemma corpus.
//!
//! The corpus is an ordered, read-only collection of seed dilemmas loaded
//! once at startup. It is walked with a cyclic cursor and used to seed
//! prompt-based generation.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::{Dilemma, DilemmaOrigin, EthicalTopic, Intensity};
use crate::domain::foundation::{DilemmaId, ValidationError};

const BUNDLED_CORPUS: &str = include_str!("../../../data/corpus_dilemmas.json");

/// Errors raised while loading a corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid corpus entry at position {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("duplicate dilemma id in corpus: {0}")]
    DuplicateId(String),
}

/// On-disk shape of a corpus entry.
#[derive(Debug, Deserialize)]
struct CorpusEntry {
    #[serde(rename = "id_dilema")]
    id: String,
    #[serde(rename = "texto_dilema")]
    text: String,
    #[serde(rename = "topico_principal")]
    topic: String,
    #[serde(rename = "intensidad")]
    intensity: String,
    #[serde(rename = "variable_oculta_primaria")]
    hidden_variable: String,
}

impl CorpusEntry {
    fn into_dilemma(self) -> Result<Dilemma, ValidationError> {
        let id = DilemmaId::new(self.id)?;
        let topic: EthicalTopic = self.topic.parse()?;
        let intensity: Intensity = self.intensity.parse()?;
        Dilemma::new(
            id,
            self.text,
            topic,
            intensity,
            DilemmaOrigin::Corpus {
                hidden_variable: self.hidden_variable,
            },
        )
    }
}

/// Ordered, immutable collection of seed dilemmas.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    dilemmas: Vec<Dilemma>,
}

impl Corpus {
    /// Builds a corpus from already-validated dilemmas.
    pub fn new(dilemmas: Vec<Dilemma>) -> Self {
        Self { dilemmas }
    }

    /// Loads the corpus bundled into the binary.
    pub fn bundled() -> Result<Self, CorpusError> {
        Self::from_json(BUNDLED_CORPUS)
    }

    /// Loads a corpus from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses a JSON array of corpus entries.
    ///
    /// # Errors
    ///
    /// - `Parse` if the document is not an array of entries
    /// - `InvalidEntry` if an entry has an empty id/text or unknown topic/intensity
    /// - `DuplicateId` if two entries share an id
    pub fn from_json(raw: &str) -> Result<Self, CorpusError> {
        let entries: Vec<CorpusEntry> = serde_json::from_str(raw)?;
        let mut seen = HashSet::new();
        let mut dilemmas = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let dilemma = entry
                .into_dilemma()
                .map_err(|e| CorpusError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            if !seen.insert(dilemma.id().clone()) {
                return Err(CorpusError::DuplicateId(dilemma.id().to_string()));
            }
            dilemmas.push(dilemma);
        }

        Ok(Self { dilemmas })
    }

    pub fn len(&self) -> usize {
        self.dilemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dilemmas.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Dilemma> {
        self.dilemmas.get(index)
    }

    pub fn first(&self) -> Option<&Dilemma> {
        self.dilemmas.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dilemma> {
        self.dilemmas.iter()
    }

    /// Position following `cursor`, wrapping to the start after the last entry.
    ///
    /// Returns `None` for an empty corpus.
    pub fn next_index(&self, cursor: usize) -> Option<usize> {
        if self.dilemmas.is_empty() {
            None
        } else {
            Some((cursor + 1) % self.dilemmas.len())
        }
    }

    /// Seed examples for prompt-based generation.
    ///
    /// Prefers entries matching both topic and intensity, then any entry on
    /// the topic.
    pub fn seeds_for(&self, topic: EthicalTopic, intensity: Intensity) -> Vec<&Dilemma> {
        let exact: Vec<&Dilemma> = self
            .dilemmas
            .iter()
            .filter(|d| d.topic() == topic && d.intensity() == intensity)
            .collect();
        if !exact.is_empty() {
            return exact;
        }
        self.dilemmas.iter().filter(|d| d.topic() == topic).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, topic: &str, intensity: &str) -> String {
        format!(
            r#"{{"id_dilema":"{}","texto_dilema":"Texto {}","topico_principal":"{}","intensidad":"{}","variable_oculta_primaria":"oculta"}}"#,
            id, id, topic, intensity
        )
    }

    fn small_corpus() -> Corpus {
        let raw = format!(
            "[{},{},{}]",
            entry("A", "Temporalidad Moral", "Suave"),
            entry("B", "Alteridad Radical", "Medio"),
            entry("C", "Temporalidad Moral", "Extremo"),
        );
        Corpus::from_json(&raw).unwrap()
    }

    #[test]
    fn bundled_corpus_loads_and_starts_with_first_temporality_entry() {
        let corpus = Corpus::bundled().unwrap();
        assert!(!corpus.is_empty());
        assert_eq!(corpus.first().unwrap().id().as_str(), "TM_S_01");
        assert!(corpus.iter().all(|d| d.is_from_corpus()));
    }

    #[test]
    fn bundled_corpus_covers_every_topic() {
        let corpus = Corpus::bundled().unwrap();
        for topic in EthicalTopic::ALL {
            assert!(corpus.iter().any(|d| d.topic() == topic), "missing {}", topic);
        }
    }

    #[test]
    fn preserves_file_order() {
        let corpus = small_corpus();
        let ids: Vec<&str> = corpus.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn next_index_wraps_after_last_entry() {
        let corpus = small_corpus();
        assert_eq!(corpus.next_index(0), Some(1));
        assert_eq!(corpus.next_index(1), Some(2));
        assert_eq!(corpus.next_index(2), Some(0));
    }

    #[test]
    fn cycling_len_plus_one_times_returns_to_start() {
        let corpus = Corpus::bundled().unwrap();
        let mut cursor = 0;
        for _ in 0..corpus.len() {
            cursor = corpus.next_index(cursor).unwrap();
        }
        assert_eq!(cursor, 0);
        assert_eq!(corpus.get(cursor), corpus.first());
    }

    #[test]
    fn next_index_on_empty_corpus_is_none() {
        let corpus = Corpus::default();
        assert_eq!(corpus.next_index(0), None);
    }

    #[test]
    fn rejects_unknown_topic() {
        let raw = format!("[{}]", entry("X", "Estética", "Suave"));
        let err = Corpus::from_json(&raw).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidEntry { index: 0, .. }));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = format!(
            "[{},{}]",
            entry("A", "Temporalidad Moral", "Suave"),
            entry("A", "Alteridad Radical", "Medio")
        );
        assert!(matches!(
            Corpus::from_json(&raw).unwrap_err(),
            CorpusError::DuplicateId(id) if id == "A"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Corpus::from_json("{not json").unwrap_err(),
            CorpusError::Parse(_)
        ));
    }

    #[test]
    fn seeds_prefer_exact_match_then_topic() {
        let corpus = small_corpus();

        let exact = corpus.seeds_for(EthicalTopic::MoralTemporality, Intensity::Extreme);
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].id().as_str(), "C");

        let by_topic = corpus.seeds_for(EthicalTopic::MoralTemporality, Intensity::Medium);
        assert_eq!(by_topic.len(), 2);

        let none = corpus.seeds_for(EthicalTopic::EverydayMicroethics, Intensity::Mild);
        assert!(none.is_empty());
    }
}
