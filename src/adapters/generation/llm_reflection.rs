//! LLM-backed ReflectionGenerator.

use async_trait::async_trait;
use std::sync::Arc;

use crate::ports::{
    AIProvider, CompletionRequest, GenerationError, MessageRole, ReflectionGenerator,
    ReflectionRequest,
};

use super::prompts::{reflection_prompt, REFLECTION_SYSTEM_PROMPT};
use super::structured_output::extract_text_field;

const NARRATIVE_FIELD: &str = "narrative";

/// Generates universalization narratives with one prompt per request.
pub struct LlmReflectionGenerator {
    provider: Arc<dyn AIProvider>,
}

impl LlmReflectionGenerator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ReflectionGenerator for LlmReflectionGenerator {
    async fn reflect(&self, request: ReflectionRequest) -> Result<String, GenerationError> {
        let completion = CompletionRequest::new()
            .with_system_prompt(REFLECTION_SYSTEM_PROMPT)
            .with_message(MessageRole::User, reflection_prompt(&request))
            .with_temperature(0.7)
            .with_json_output();

        let response = self.provider.complete(completion).await?;
        extract_text_field(&response.content, NARRATIVE_FIELD)
    }
}
