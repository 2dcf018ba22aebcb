//! RAG-backed DilemmaGenerator.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::dilemma::{Dilemma, DilemmaOrigin, EthicalTopic, Intensity};
use crate::domain::foundation::DilemmaId;
use crate::ports::{
    DilemmaGenerator, DilemmaRequest, GenerationError, RagDilemmaRequest, RagError, RagService,
};

/// Synthetic id prefix for RAG dilemmas.
pub const RAG_ID_PREFIX: &str = "rag";

impl From<RagError> for GenerationError {
    fn from(err: RagError) -> Self {
        GenerationError::Remote(err.to_string())
    }
}

/// Generates dilemmas through the RAG service.
pub struct RagDilemmaGenerator {
    service: Arc<dyn RagService>,
}

impl RagDilemmaGenerator {
    pub fn new(service: Arc<dyn RagService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl DilemmaGenerator for RagDilemmaGenerator {
    async fn generate(&self, request: DilemmaRequest) -> Result<Dilemma, GenerationError> {
        let response = self
            .service
            .generate_dilemma(RagDilemmaRequest {
                topic: request.topic.name().to_string(),
                intensity: request.intensity.name().to_string(),
                user_context: request.user_context.clone(),
            })
            .await?;

        // The service echoes topic and intensity; keep the requested ones if
        // it answers with a label outside the catalogue.
        let topic = response
            .topic
            .parse::<EthicalTopic>()
            .unwrap_or(request.topic);
        let intensity = response
            .intensity
            .parse::<Intensity>()
            .unwrap_or(request.intensity);

        Dilemma::new(
            DilemmaId::synthetic(RAG_ID_PREFIX),
            response.dilemma_text,
            topic,
            intensity,
            DilemmaOrigin::Rag {
                philosophical_foundation: response.philosophical_foundation,
                hidden_variable: response.hidden_variable,
                used_sources: response.used_sources,
            },
        )
        .map_err(|_| GenerationError::EmptyOutput)
    }

    fn source_name(&self) -> &'static str {
        "rag"
    }
}
