//! employer-registry server entry point.
//!
//! Opens the store, serves the API and page, and closes the store after a
//! graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use employer_registry::app_state::AppState;
use employer_registry::build_app;
use employer_registry::config::{AppConfig, LogFormat};
use employer_registry::persistence::{
    EmployerStore, InMemoryEmployerStore, PostgresEmployerStore, connect_pool,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid LISTEN_ADDR")?;
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting employer-registry");

    // The pool is kept outside the store so it can be closed on shutdown
    let (store, pool) = if config.persistence_enabled {
        let pool = connect_pool(&config)
            .await
            .context("failed to connect to the database")?;
        let store: Arc<dyn EmployerStore> = Arc::new(PostgresEmployerStore::new(pool.clone()));
        (store, Some(pool))
    } else {
        tracing::warn!("persistence disabled; employers are kept in memory");
        let store: Arc<dyn EmployerStore> = Arc::new(InMemoryEmployerStore::new());
        (store, None)
    };
    tracing::info!(backend = store.backend(), "employer store ready");

    let app = build_app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("database pool closed");
    }
    tracing::info!("shutdown complete");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
