use anyhow::Result;
use salesboard_dashboard_api::{create_app, AppState};
use salesboard_utils::{init_logging, AppConfig, GridSource};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Salesboard Dashboard API");

    // Resolve the sheet source
    let source = GridSource::from_config(&config.sheet)?;
    info!(source = %source.describe(), "Sheet source configured");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_app(AppState::new(source, config)?);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    info!("Dashboard API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
