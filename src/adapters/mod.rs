//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat completion providers (OpenAI-compatible, mock)
//! - `generation` - Dilemma and reflection generators over the AI and RAG ports
//! - `http` - REST API (axum)
//! - `rag` - RAG service HTTP client
//! - `storage` - Key-value stores for session persistence

pub mod ai;
pub mod generation;
pub mod http;
pub mod rag;
pub mod storage;

pub use http::api_router;
