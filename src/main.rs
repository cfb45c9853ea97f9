// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_store::DashboardStore;
use crate::application::id_generator::IdGenerator;
use crate::infrastructure::config::{load_app_config, IdStrategy};
use crate::infrastructure::id_generators::{SequentialIdGenerator, UuidIdGenerator};
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing, RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ids: Arc<dyn IdGenerator> = match config.ids.strategy {
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new(config.ids.prefix.clone())),
    };

    // Store and services (application layer)
    let dashboard_service = DashboardService::new(DashboardStore::seeded(), ids);
    let state = Arc::new(AppState { dashboard_service });

    let router = build_router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    tracing::info!("Starting widget-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
