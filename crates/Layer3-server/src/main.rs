//! ScriptForge gateway - main entry point

use std::net::SocketAddr;
use std::sync::Arc;

use scriptforge_core::{LocalExecutor, ScriptStore, TaskPipeline};
use scriptforge_foundation::GatewayConfig;
use scriptforge_provider::CompletionClient;
use scriptforge_server::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptforge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    // Fails fatally when the completion credential is absent.
    let config = GatewayConfig::from_env()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        model = %config.model,
        "Loaded gateway configuration"
    );

    // --- Confined directory ---
    let store = ScriptStore::new(&config.data_dir)?;
    tracing::info!(root = %store.root().display(), "Confined directory ready");

    // --- Pipeline ---
    let client = CompletionClient::new(config.api_key.clone(), config.model.clone())
        .with_base_url(config.base_url.clone());

    let pipeline = Arc::new(TaskPipeline::new(
        Arc::new(client),
        store.clone(),
        Arc::new(LocalExecutor::new()),
    ));

    // --- HTTP server ---
    let state = AppState { pipeline, store };
    let app = router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, "Gateway listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
