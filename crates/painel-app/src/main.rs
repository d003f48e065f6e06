use std::sync::Arc;

use painel_app::app::api::routes;
use painel_app::config::ConfigHandler;
use painel_app::gateway_handler::GatewayHandler;
use painel_app::store_handler::StoreHandler;
use painel_core::config::load_config;
use painel_service::gateway::GatewayClient;
use painel_store::MemoryStore;
use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_log::LogTracer::init().ok();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Painel scheduling panel");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = Arc::new(MemoryStore::new());
    let gateway = Arc::new(GatewayClient::new(config.gateway.clone()));

    if config.gateway.is_configured() {
        tracing::info!("Messaging gateway configured for real sends");
    } else {
        tracing::warn!("Messaging gateway not configured; sends will be mocked");
    }

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(GatewayHandler { client: gateway })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
