//! LLM-backed DilemmaGenerator seeded with corpus entries.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::dilemma::{Corpus, Dilemma, DilemmaOrigin};
use crate::domain::foundation::DilemmaId;
use crate::ports::{
    AIProvider, CompletionRequest, DilemmaGenerator, DilemmaRequest, GenerationError, MessageRole,
};

use super::prompts::{dilemma_prompt, DILEMMA_SYSTEM_PROMPT};
use super::structured_output::extract_text_field;

const DILEMMA_FIELD: &str = "dilemmaText";

/// Synthetic id prefix for prompt-generated dilemmas.
pub const GENERATED_ID_PREFIX: &str = "generated";

/// Generates dilemmas by prompting a language model with seed examples.
pub struct LlmDilemmaGenerator {
    provider: Arc<dyn AIProvider>,
    corpus: Arc<Corpus>,
}

impl LlmDilemmaGenerator {
    pub fn new(provider: Arc<dyn AIProvider>, corpus: Arc<Corpus>) -> Self {
        Self { provider, corpus }
    }
}

#[async_trait]
impl DilemmaGenerator for LlmDilemmaGenerator {
    async fn generate(&self, request: DilemmaRequest) -> Result<Dilemma, GenerationError> {
        let seeds = self.corpus.seeds_for(request.topic, request.intensity);
        let completion = CompletionRequest::new()
            .with_system_prompt(DILEMMA_SYSTEM_PROMPT)
            .with_message(MessageRole::User, dilemma_prompt(&request, &seeds))
            .with_temperature(0.9)
            .with_json_output();

        let response = self.provider.complete(completion).await?;
        let text = extract_text_field(&response.content, DILEMMA_FIELD)?;

        Dilemma::new(
            DilemmaId::synthetic(GENERATED_ID_PREFIX),
            text,
            request.topic,
            request.intensity,
            DilemmaOrigin::Generated,
        )
        .map_err(|e| GenerationError::Malformed(e.to_string()))
    }

    fn source_name(&self) -> &'static str {
        "llm"
    }
}
