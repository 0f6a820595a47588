use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use content_strategist::adapters::http::{app_router, StrategyAppState};
use content_strategist::adapters::{
    HttpGeneratorConfig, HttpStrategyGenerator, InMemoryClipboard, InMemorySessionStore,
    LocalFileExporter, MockStrategyGenerator,
};
use content_strategist::application::MessagePacer;
use content_strategist::config::{AppConfig, GeneratorKind, ServerConfig};
use content_strategist::ports::StrategyGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    let generator: Arc<dyn StrategyGenerator> = match config.generation.provider {
        GeneratorKind::Http => {
            if !config.generation.has_api_key() {
                tracing::warn!("no generation API key configured; requests are sent unauthenticated");
            }
            Arc::new(HttpStrategyGenerator::new(HttpGeneratorConfig::from(
                &config.generation,
            ))?)
        }
        GeneratorKind::Mock => Arc::new(MockStrategyGenerator::new()),
    };

    let state = StrategyAppState {
        store: Arc::new(InMemorySessionStore::new()),
        generator,
        exporter: Arc::new(LocalFileExporter::new(config.export.directory.clone())),
        clipboard: Arc::new(InMemoryClipboard::new()),
        pacer: MessagePacer::new(config.pacing.clone()),
        generation_timeout: config.generation.timeout(),
    };
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr();
    info!(
        %addr,
        environment = %config.server.environment,
        generator = ?config.generation.provider,
        "server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
