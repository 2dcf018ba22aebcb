//! RAG API Client - reqwest implementation of the RagService port.
//!
//! One request per call with a fixed overall timeout. A request that
//! exceeds it is reported as `RagError::Timeout`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::ports::{
    RagDilemmaRequest, RagDilemmaResponse, RagError, RagHealth, RagService, RagTopics,
};

/// Default service location.
pub const DEFAULT_RAG_BASE_URL: &str = "http://localhost:8000";

/// Default abort-after timeout.
pub const DEFAULT_RAG_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the RAG service.
#[derive(Debug, Clone)]
pub struct RagApiClient {
    base_url: String,
    client: Client,
}

impl RagApiClient {
    /// Creates a client for `base_url` with the given timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RagError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RagError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Sends a request and decodes a JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RagError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RagError::Timeout
            } else {
                RagError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RagError::Http {
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                RagError::Timeout
            } else {
                RagError::Parse(e.to_string())
            }
        })
    }
}

#[async_trait]
impl RagService for RagApiClient {
    async fn generate_dilemma(
        &self,
        request: RagDilemmaRequest,
    ) -> Result<RagDilemmaResponse, RagError> {
        let response: RagDilemmaResponse = self
            .send(self.client.post(self.url("/generate-dilemma")).json(&request))
            .await?;

        if !response.success {
            return Err(RagError::Unsuccessful(
                "service reported success: false".to_string(),
            ));
        }
        if response.dilemma_text.trim().is_empty() {
            return Err(RagError::Unsuccessful("empty dilemma_text".to_string()));
        }

        tracing::debug!(
            topic = %response.topic,
            intensity = %response.intensity,
            generation_time_ms = ?response.generation_time_ms,
            "RAG dilemma generated"
        );
        Ok(response)
    }

    async fn topics(&self) -> Result<RagTopics, RagError> {
        self.send(self.client.get(self.url("/topics"))).await
    }

    async fn health(&self) -> Result<RagHealth, RagError> {
        self.send(self.client.get(self.url("/health"))).await
    }
}
