//! Reflection Generator Port - Interface for universalization narratives.

use async_trait::async_trait;

use crate::domain::dilemma::EthicalTopic;
use crate::domain::foundation::ResponseValue;

use super::GenerationError;

/// What the narrative is asked to reflect on.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionRequest {
    pub dilemma_text: String,
    pub response: ResponseValue,
    pub topic: EthicalTopic,
}

/// Port for generating a "what if everyone did this" narrative.
#[async_trait]
pub trait ReflectionGenerator: Send + Sync {
    /// Returns the narrative text.
    ///
    /// # Errors
    /// `GenerationError::EmptyOutput` or `Malformed` if the model output is
    /// unusable; `Provider` if the call itself failed.
    async fn reflect(&self, request: ReflectionRequest) -> Result<String, GenerationError>;
}
