//! RAG Service Port - Interface for the retrieval-augmented dilemma service.
//!
//! The service is an opaque remote collaborator. This port mirrors its three
//! endpoints: dilemma generation, the topic catalogue and health.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message used when a request exceeds the client timeout.
pub const RAG_TIMEOUT_MESSAGE: &str = "Request timeout - RAG server might be slow or unavailable";

/// Body of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagDilemmaRequest {
    pub topic: String,
    pub intensity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context: Option<String>,
}

/// A generated dilemma as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagDilemmaResponse {
    pub success: bool,
    pub dilemma_text: String,
    pub philosophical_foundation: String,
    #[serde(default)]
    pub used_sources: Vec<String>,
    pub hidden_variable: String,
    pub topic: String,
    pub intensity: String,
    #[serde(default)]
    pub sources_metadata: Vec<serde_json::Value>,
    #[serde(default)]
    pub generation_time_ms: Option<f64>,
}

/// Topics and intensities the service accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagTopics {
    pub topics: Vec<String>,
    pub intensities: Vec<String>,
}

/// Service health as reported by `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagHealth {
    #[serde(default = "unknown")]
    pub status: String,
    #[serde(default = "unknown")]
    pub rag_status: String,
    #[serde(default)]
    pub available_topics: u32,
}

fn unknown() -> String {
    "unknown".to_string()
}

/// RAG client errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RagError {
    #[error("{}", RAG_TIMEOUT_MESSAGE)]
    Timeout,

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse RAG response: {0}")]
    Parse(String),

    /// The service answered but reported failure or empty text.
    #[error("RAG generation unsuccessful: {0}")]
    Unsuccessful(String),
}

/// Port for the RAG service.
#[async_trait]
pub trait RagService: Send + Sync {
    /// `POST /generate-dilemma`
    async fn generate_dilemma(
        &self,
        request: RagDilemmaRequest,
    ) -> Result<RagDilemmaResponse, RagError>;

    /// `GET /topics`
    async fn topics(&self) -> Result<RagTopics, RagError>;

    /// `GET /health`
    async fn health(&self) -> Result<RagHealth, RagError>;
}
