//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `KeyValueStore` - String-keyed storage for the session identifier and answers
//!
//! ## Generation
//!
//! - `AIProvider` - Language model completions
//! - `DilemmaGenerator` - Remote dilemma generation (RAG or prompt-based)
//! - `ReflectionGenerator` - Universalization narratives
//! - `RagService` - The retrieval-augmented generation HTTP service

mod ai_provider;
mod dilemma_generator;
mod key_value_store;
mod rag_service;
mod reflection_generator;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use dilemma_generator::{DilemmaGenerator, DilemmaRequest, GenerationError};
pub use key_value_store::{KeyValueError, KeyValueStore};
pub use rag_service::{
    RagDilemmaRequest, RagDilemmaResponse, RagError, RagHealth, RagService, RagTopics,
    RAG_TIMEOUT_MESSAGE,
};
pub use reflection_generator::{ReflectionGenerator, ReflectionRequest};
