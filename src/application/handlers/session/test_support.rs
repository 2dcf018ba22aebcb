//! Shared fixtures for session handler tests.

use std::sync::Arc;

use crate::adapters::ai::MockAIProvider;
use crate::adapters::generation::{LlmDilemmaGenerator, LlmReflectionGenerator};
use crate::adapters::storage::InMemoryKeyValueStore;
use crate::application::{SessionPersistence, SessionRuntime, SessionSettings};
use crate::domain::dilemma::Corpus;

pub(crate) struct Harness {
    pub runtime: Arc<SessionRuntime>,
    pub store: InMemoryKeyValueStore,
    pub dilemma_ai: Arc<MockAIProvider>,
    pub reflection_ai: Arc<MockAIProvider>,
}

pub(crate) fn harness(settings: SessionSettings) -> Harness {
    harness_with(Corpus::bundled().unwrap(), MockAIProvider::new(), MockAIProvider::new(), settings)
}

pub(crate) fn harness_with(
    corpus: Corpus,
    dilemma_ai: MockAIProvider,
    reflection_ai: MockAIProvider,
    settings: SessionSettings,
) -> Harness {
    let store = InMemoryKeyValueStore::new();
    let corpus = Arc::new(corpus);
    let dilemma_ai = Arc::new(dilemma_ai);
    let reflection_ai = Arc::new(reflection_ai);

    let runtime = SessionRuntime::new(
        SessionPersistence::new(Arc::new(store.clone())),
        corpus.clone(),
        Arc::new(LlmDilemmaGenerator::new(dilemma_ai.clone(), corpus)),
        Arc::new(LlmReflectionGenerator::new(reflection_ai.clone())),
        settings,
    );

    Harness {
        runtime: Arc::new(runtime),
        store,
        dilemma_ai,
        reflection_ai,
    }
}
