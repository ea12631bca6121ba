//! Meridian Drive server.
//!
//! Main entry point that wires the crates together and starts the
//! HTTP server. The database pool is created here, injected into the
//! record store, and closed here on shutdown.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use drive_api::state::AppState;
use drive_browser::{BrowseService, PgRecordStore};
use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("DRIVE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Meridian Drive v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db_pool = DatabasePool::connect(&config.database).await?;
    drive_database::migration::run_migrations(db_pool.pool()).await?;

    // Record store and navigation service
    let store = Arc::new(PgRecordStore::new(db_pool.clone()));
    let browse = Arc::new(BrowseService::new(store));

    let state = AppState {
        config: Arc::new(config.clone()),
        browse,
    };

    let app = drive_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Drive server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Drive server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
