use std::process::ExitCode;

use league_standings_api::config::Config;
use league_standings_api::db::StandingsStore;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting standings api server...");

    let config = Config::from_env()?;

    let store = StandingsStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| format!("Failed to connect to database: {e}"))?;

    tracing::info!("Database connection established.");

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {addr}: {e}"))?;

    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, league_standings_api::app(store.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    tracing::info!("Server shutdown complete");

    served.map_err(Into::into)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::warn!("Received SIGTERM, shutting down...");
        }
    }
}
