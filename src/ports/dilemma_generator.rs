//! Dilemma Generator Port - Interface for producing new dilemmas remotely.
//!
//! Implementations either call the RAG service or prompt a language model
//! seeded with corpus entries. Both tag their output with a synthetic id.

use async_trait::async_trait;

use crate::domain::dilemma::{Dilemma, EthicalTopic, Intensity};

use super::AIError;

/// Parameters for one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilemmaRequest {
    pub topic: EthicalTopic,
    pub intensity: Intensity,
    /// Natural-language digest of the user's answers.
    pub user_context: Option<String>,
}

impl DilemmaRequest {
    pub fn new(topic: EthicalTopic, intensity: Intensity) -> Self {
        Self {
            topic,
            intensity,
            user_context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.user_context = Some(context.into());
        self
    }
}

/// Failures shared by every remote generator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The generator answered without usable text.
    #[error("generator returned empty output")]
    EmptyOutput,

    /// The output did not match the expected shape.
    #[error("malformed generator output: {0}")]
    Malformed(String),

    /// The language model call failed.
    #[error("language model error: {0}")]
    Provider(#[from] AIError),

    /// The remote service failed or refused the request.
    #[error("{0}")]
    Remote(String),
}

/// Port for remote dilemma generation.
#[async_trait]
pub trait DilemmaGenerator: Send + Sync {
    /// Produce one dilemma for the requested topic and intensity.
    ///
    /// Single attempt; no retries.
    async fn generate(&self, request: DilemmaRequest) -> Result<Dilemma, GenerationError>;

    /// Short name used in logs ("rag", "llm").
    fn source_name(&self) -> &'static str;
}
