// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::chartjs_renderer::ChartJsRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::embedded_dataset::EmbeddedDataset;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Load the dataset once; services share it read-only
    let dashboard_service = DashboardService::new(Arc::new(EmbeddedDataset))?;

    let default_view = config.view.initial_state();
    tracing::info!(
        "Default view: language={}, unit={}",
        default_view.language(),
        default_view.unit()
    );

    let state = Arc::new(AppState {
        dashboard_service,
        renderer: ChartJsRenderer,
        default_view,
    });

    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting climate-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
