//! HTTP handlers for service status endpoints.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::domain::dilemma::{EthicalTopic, Intensity};
use crate::ports::{RagHealth, RagService};

#[derive(Clone)]
pub struct SystemState {
    rag: Option<Arc<dyn RagService>>,
}

impl SystemState {
    pub fn new(rag: Option<Arc<dyn RagService>>) -> Self {
        Self { rag }
    }
}

/// Where a topic catalogue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueSource {
    Rag,
    Local,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub rag: RagStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RagStatus {
    Disabled,
    Unavailable { reason: String },
    Available(RagHealth),
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
    pub intensities: Vec<String>,
    pub source: CatalogueSource,
}

impl TopicsResponse {
    fn local() -> Self {
        Self {
            topics: EthicalTopic::ALL.iter().map(|t| t.name().to_string()).collect(),
            intensities: Intensity::ALL.iter().map(|i| i.name().to_string()).collect(),
            source: CatalogueSource::Local,
        }
    }
}

/// GET /health
pub async fn health(State(state): State<SystemState>) -> Json<HealthResponse> {
    let rag = match &state.rag {
        None => RagStatus::Disabled,
        Some(rag) => match rag.health().await {
            Ok(health) => RagStatus::Available(health),
            Err(e) => RagStatus::Unavailable {
                reason: e.to_string(),
            },
        },
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rag,
    })
}

/// GET /api/topics - Topic and intensity catalogue
///
/// Prefers the RAG service's catalogue and falls back to the local one.
pub async fn topics(State(state): State<SystemState>) -> Json<TopicsResponse> {
    let Some(rag) = &state.rag else {
        return Json(TopicsResponse::local());
    };

    match rag.topics().await {
        Ok(remote) => Json(TopicsResponse {
            topics: remote.topics,
            intensities: remote.intensities,
            source: CatalogueSource::Rag,
        }),
        Err(e) => {
            debug!(error = %e, "RAG topic catalogue unavailable, serving local catalogue");
            Json(TopicsResponse::local())
        }
    }
}
