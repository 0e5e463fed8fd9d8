//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, registry initialization, and Axum server lifecycle.

use crate::application::services::AliasRegistry;
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteUrlRepository, connect_pool};
use crate::routes::app_router;
use crate::state::{AppState, BasicCredentials};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Record schema (idempotent)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The storage cannot be opened or its schema created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = init_registry(&config).await?;

    let state = AppState::new(
        Arc::new(registry),
        BasicCredentials {
            user: config.http_user.clone(),
            password: config.http_password.clone(),
        },
    );

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "Starting server");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Opens the storage and returns a registry with its schema in place.
///
/// Creates the parent directory of a file-backed database if needed.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or initialized.
pub async fn init_registry(config: &Config) -> Result<AliasRegistry> {
    if config.storage_path != ":memory:"
        && let Some(parent) = Path::new(&config.storage_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create storage directory {}", parent.display())
        })?;
    }

    let pool = connect_pool(&config.storage_path, config.db_max_connections)
        .await
        .context("Failed to open storage")?;
    tracing::info!("Connected to storage");

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));

    AliasRegistry::init(repository)
        .await
        .context("Failed to initialize storage schema")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
