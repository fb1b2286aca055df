//! eLibrary Server - electronic library catalog
//!
//! Loads the JSON snapshots, serves the REST API and writes the snapshots
//! back on shutdown.

use anyhow::Context;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elibrary_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    services::{Services, SnapshotStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting eLibrary Server v{}", env!("CARGO_PKG_VERSION"));

    // Registries are created here and shared with every service
    let repository = Repository::new();
    let store = SnapshotStore::new(&config.storage.data_dir);
    let services = Services::new(repository, store);

    let restored = services.snapshot.restore().await;
    tracing::info!(
        "Restored {} administrators, {} users, {} books, {} inventory records, {} loans",
        restored.administradores,
        restored.usuarios,
        restored.libros,
        restored.inventario,
        restored.prestamos
    );

    if config.storage.seed_defaults && services.snapshot.seed_defaults_if_empty()? {
        if let Err(e) = services.snapshot.flush().await {
            tracing::warn!("Could not write initial snapshot: {}", e);
        }
    }

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid host address '{}'", config.server.host))?,
        config.server.port,
    );
    let flush_on_shutdown = config.storage.flush_on_shutdown;

    let state = AppState::new(config, services);
    let app = api::create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if flush_on_shutdown {
        match state.services.snapshot.flush().await {
            Ok(report) => tracing::info!("Final snapshot written: {} books", report.libros),
            Err(e) => tracing::error!("Final snapshot failed: {}", e),
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elibrary_server={},tower_http=debug", logging.level).into());

    let json = logging.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
