//! RAG Adapters.
//!
//! - `RagApiClient` - HTTP client for the retrieval-augmented generation service

mod client;

pub use client::{RagApiClient, DEFAULT_RAG_BASE_URL, DEFAULT_RAG_TIMEOUT};
