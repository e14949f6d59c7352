use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use resume_review::application::ports::LlmClient;
use resume_review::application::services::{AnalysisService, DocumentExtractor};
use resume_review::infrastructure::llm::create_chat_completions_client;
use resume_review::infrastructure::observability::{TracingConfig, init_tracing};
use resume_review::infrastructure::text_processing::CompositeFileLoader;
use resume_review::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        &settings.logging,
        environment.as_str(),
    ));

    let document_extractor = Arc::new(DocumentExtractor::new(Arc::new(
        CompositeFileLoader::with_document_adapters(),
    )));

    let llm_client: Option<Arc<dyn LlmClient>> = create_chat_completions_client(&settings.llm)
        .context("failed to create LLM client")?
        .map(|client| {
            tracing::info!(
                provider = %settings.llm.provider,
                base_url = client.base_url(),
                model = %settings.llm.chat_model,
                "LLM client configured"
            );
            Arc::new(client) as Arc<dyn LlmClient>
        });

    if llm_client.is_none() {
        tracing::warn!("No LLM API key configured, analysis will use demo feedback");
    }

    let analysis_service = Arc::new(AnalysisService::new(
        llm_client,
        Duration::from_secs(settings.llm.timeout_seconds),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        document_extractor,
        analysis_service,
        settings,
    };

    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
