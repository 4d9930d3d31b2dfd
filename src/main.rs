mod config;
mod error;
mod fixtures;
mod models;
mod routes;
mod server;
mod state;

use clap::Parser;
use std::sync::Arc;
use tracing::info;

use config::{ApiConfig, CliArgs};
use state::ApiState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mxsec_api=info,tower_http=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting mxsec-api v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::from_args(args);
    let addr = format!("{}:{}", config.bind, config.port);

    let state = Arc::new(ApiState::new(config));

    let router = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("mxsec-api listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("mxsec-api shutting down");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal");
}
