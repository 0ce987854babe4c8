use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kennel_core::store::{DogStore, MemoryDogStore};
use tokio_util::sync::CancellationToken;

use kennel_api::config::{ServerConfig, StoreBackend};
use kennel_api::router::build_app_router;
use kennel_api::state::AppState;
use kennel_api::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(err) = run().await {
        eprintln!("kennel-api: {err:#}");
        std::process::exit(1);
    }
}

/// Wire up telemetry, the store and the router, then serve until a
/// termination signal arrives.
async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = ServerConfig::from_env().context("loading configuration")?;

    // --- Telemetry ---
    let telemetry = telemetry::init(LogFormat::for_env(config.env), &config.project_id)
        .context("initializing telemetry")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        project_id = %config.project_id,
        store = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Store ---
    let store = connect_store(&config).await?;

    // --- App state ---
    let state = AppState::new(store, telemetry.logger(), config.clone());
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().context("parsing HOST")?,
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Starting server");

    let shutdown = CancellationToken::new();
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            result.context("server task panicked")?.context("server error")?;
        }
        () = shutdown_signal() => {
            shutdown.cancel();
            let drain = Duration::from_secs(config.shutdown_timeout_secs);
            match tokio::time::timeout(drain, &mut server).await {
                Ok(result) => {
                    result.context("server task panicked")?.context("server error")?;
                    tracing::info!("Server has shut down gracefully");
                }
                Err(_) => {
                    tracing::warn!(?drain, "Connections still open after drain timeout, aborting");
                    server.abort();
                }
            }
        }
    }

    telemetry.shutdown();
    Ok(())
}

/// Build the configured [`DogStore`].
async fn connect_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn DogStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory dog store; records are lost on restart");
            Ok(Arc::new(MemoryDogStore::new()))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            let pool = kennel_db::create_pool(database_url, config.database_max_connections)
                .await
                .context("connecting to database")?;
            tracing::info!("Database connection pool created");

            kennel_db::health_check(&pool)
                .await
                .context("database health check")?;
            tracing::info!("Database health check passed");

            kennel_db::run_migrations(&pool)
                .await
                .context("running database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(kennel_db::PgDogStore::new(pool)))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix). If a handler cannot
/// be installed, that signal source is ignored rather than shutting down.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
