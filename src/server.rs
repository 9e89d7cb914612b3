//! HTTP server initialization and runtime setup.
//!
//! Builds the configured storage backend, wires the store into the router
//! and runs the Axum server until a shutdown signal arrives.

use crate::application::services::UrlStore;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomKeyGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Builds the URL store for the configured backend.
///
/// For PostgreSQL this connects the pool and creates the `urls` table if it
/// does not exist yet.
///
/// # Errors
///
/// Returns an error if the postgres backend is selected and the database is
/// unreachable or the migration fails.
pub async fn build_store(config: &Config) -> Result<UrlStore> {
    let repository: Arc<dyn UrlRepository> = match config.storage_backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage, mappings are lost on restart");
            Arc::new(MemoryUrlRepository::new())
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set for the postgres backend")?;
            let repository = PgUrlRepository::connect(database_url, &config.pool_settings())
                .await
                .context("Failed to initialize PostgreSQL storage")?;
            Arc::new(repository)
        }
    };

    Ok(UrlStore::new(
        repository,
        Arc::new(RandomKeyGenerator::new()),
        config.code_max_attempts,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;
    info!("Storage ready ({})", store.backend());

    let state = AppState::new(Arc::new(store), config.base_url.clone());
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
