//! kantify: HTTP server for ethical dilemma sessions
//!
//! Configuration comes from `KANTIFY__*` environment variables (and `.env`).

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kantify::adapters::ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
use kantify::adapters::generation::{
    LlmDilemmaGenerator, LlmReflectionGenerator, RagDilemmaGenerator,
};
use kantify::adapters::http::{api_router, HttpSettings};
use kantify::adapters::rag::RagApiClient;
use kantify::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use kantify::application::handlers::session::InitializeSessionHandler;
use kantify::application::{SessionPersistence, SessionRuntime};
use kantify::config::{AiConfig, AppConfig, DilemmaSource, StorageBackend};
use kantify::ports::{AIProvider, DilemmaGenerator, KeyValueStore, RagService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    info!(
        environment = ?config.server.environment,
        source = ?config.session.dilemma_source,
        "Starting kantify"
    );

    let corpus = Arc::new(config.corpus.load().context("failed to load dilemma corpus")?);
    info!(dilemmas = corpus.len(), "Corpus loaded");

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => {
            info!(data_dir = %config.storage.data_dir.display(), "Using file storage");
            Arc::new(FileKeyValueStore::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, sessions will not survive a restart");
            Arc::new(InMemoryKeyValueStore::new())
        }
    };

    let ai = build_ai_provider(&config.ai)?;
    let ai_info = ai.provider_info();
    info!(provider = %ai_info.name, model = %ai_info.model, "Language model configured");

    let rag: Option<Arc<dyn RagService>> = if config.rag.enabled {
        let client = RagApiClient::new(config.rag.base_url.clone(), config.rag.timeout())
            .context("failed to build RAG client")?;
        info!(base_url = %client.base_url(), "RAG service configured");
        Some(Arc::new(client))
    } else {
        None
    };

    let dilemmas: Arc<dyn DilemmaGenerator> = match (config.session.dilemma_source, &rag) {
        (DilemmaSource::Rag, Some(rag)) => Arc::new(RagDilemmaGenerator::new(rag.clone())),
        _ => Arc::new(LlmDilemmaGenerator::new(ai.clone(), corpus.clone())),
    };
    let reflections = Arc::new(LlmReflectionGenerator::new(ai));

    let runtime = Arc::new(SessionRuntime::new(
        SessionPersistence::new(store),
        corpus,
        dilemmas,
        reflections,
        config.session.settings(),
    ));

    InitializeSessionHandler::new(runtime.clone())
        .handle()
        .await
        .context("failed to initialize session")?;

    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = api_router(runtime, rag, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.server.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_ai_provider(config: &AiConfig) -> anyhow::Result<Arc<dyn AIProvider>> {
    if config.mock {
        warn!("Using mock language model provider");
        return Ok(Arc::new(MockAIProvider::new()));
    }

    let api_key = config
        .api_key
        .clone()
        .context("KANTIFY__AI__API_KEY is required")?;
    let provider = OpenAIProvider::new(
        OpenAIConfig::from_secret(api_key)
            .with_base_url(&config.base_url)
            .with_model(&config.model)
            .with_provider_name(&config.provider_name)
            .with_timeout(config.timeout()),
    )?;
    Ok(Arc::new(provider))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
