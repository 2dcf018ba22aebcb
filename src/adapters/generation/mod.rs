//! Generation Adapters.
//!
//! Implementations of the DilemmaGenerator and ReflectionGenerator ports.
//!
//! ## Available Adapters
//!
//! - `RagDilemmaGenerator` - Dilemmas from the RAG service
//! - `LlmDilemmaGenerator` - Dilemmas from a corpus-seeded prompt
//! - `LlmReflectionGenerator` - Universalization narratives from a prompt

mod llm_dilemma_generator;
mod llm_reflection;
mod prompts;
mod rag_dilemma_generator;
mod structured_output;

pub use llm_dilemma_generator::{LlmDilemmaGenerator, GENERATED_ID_PREFIX};
pub use llm_reflection::LlmReflectionGenerator;
pub use rag_dilemma_generator::{RagDilemmaGenerator, RAG_ID_PREFIX};
pub use structured_output::extract_text_field;
