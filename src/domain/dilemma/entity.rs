//! Dilemma entity.

use serde::{Deserialize, Serialize};

use super::{EthicalTopic, Intensity};
use crate::domain::foundation::{DilemmaId, ValidationError};

/// Where a dilemma came from, with the metadata each source carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DilemmaOrigin {
    /// Drawn unmodified from the bundled corpus.
    Corpus { hidden_variable: String },
    /// Produced by a prompt-templated language model call.
    Generated,
    /// Produced by the RAG service.
    Rag {
        philosophical_foundation: String,
        hidden_variable: String,
        #[serde(default)]
        used_sources: Vec<String>,
    },
}

/// An ethical scenario tagged with topic and intensity.
///
/// # Invariants
///
/// - `text` is non-empty
/// - immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dilemma {
    id: DilemmaId,
    text: String,
    topic: EthicalTopic,
    intensity: Intensity,
    #[serde(flatten)]
    origin: DilemmaOrigin,
}

impl Dilemma {
    /// Creates a dilemma, rejecting empty text.
    pub fn new(
        id: DilemmaId,
        text: impl Into<String>,
        topic: EthicalTopic,
        intensity: Intensity,
        origin: DilemmaOrigin,
    ) -> Result<Self, ValidationError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ValidationError::empty_field("dilemma_text"));
        }
        Ok(Self {
            id,
            text,
            topic,
            intensity,
            origin,
        })
    }

    pub fn id(&self) -> &DilemmaId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn topic(&self) -> EthicalTopic {
        self.topic
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn origin(&self) -> &DilemmaOrigin {
        &self.origin
    }

    /// The hidden ethical variable the dilemma probes, when known.
    pub fn hidden_variable(&self) -> Option<&str> {
        match &self.origin {
            DilemmaOrigin::Corpus { hidden_variable }
            | DilemmaOrigin::Rag {
                hidden_variable, ..
            } => Some(hidden_variable.as_str()),
            DilemmaOrigin::Generated => None,
        }
    }

    /// Returns true if the dilemma is a bundled corpus entry.
    pub fn is_from_corpus(&self) -> bool {
        matches!(self.origin, DilemmaOrigin::Corpus { .. })
    }
}

/// A dilemma as currently shown, with the narrative attached once available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedDilemma {
    pub dilemma: Dilemma,
    pub narrative: Option<String>,
}

impl PresentedDilemma {
    /// Presents a dilemma that has not been reflected on yet.
    pub fn fresh(dilemma: Dilemma) -> Self {
        Self {
            dilemma,
            narrative: None,
        }
    }

    /// Presents a dilemma with an existing narrative.
    pub fn with_narrative(dilemma: Dilemma, narrative: Option<String>) -> Self {
        Self { dilemma, narrative }
    }
}
