use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use storage::{Database, MemoryTournamentStore, PgTournamentStore, TournamentStore};
use tokio::sync::oneshot;
use tourney_web::{
    AppState,
    config::{Cli, Config, StorageBackend, redact_database_url},
    console, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting tourney server");

    let config = Config::from_cli(Cli::parse()).context("Failed to load server configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = open_store(&config.storage).await?;
    let app = create_router(AppState::new(store));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    tracing::info!("Listening on http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let (stop_tx, stop_rx) = oneshot::channel();
    console::spawn(stop_tx).context("Failed to start operator console")?;
    tracing::info!("Type `stop` to shut the server down");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(stop_rx))
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn open_store(backend: &StorageBackend) -> anyhow::Result<Arc<dyn TournamentStore>> {
    match backend {
        StorageBackend::InMemory => {
            tracing::warn!("Using in-memory storage, tournaments will not survive a restart");
            let store: Arc<dyn TournamentStore> = Arc::new(MemoryTournamentStore::new());
            Ok(store)
        }
        StorageBackend::Postgres { database_url } => {
            tracing::info!(
                "Connecting to database at: {}",
                redact_database_url(database_url)
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;
            tracing::info!("Database connection established");

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Database migrations completed successfully");

            let store: Arc<dyn TournamentStore> = Arc::new(PgTournamentStore::new(db.pool().clone()));
            Ok(store)
        }
    }
}

/// Resolves on Ctrl-C or when the console reads a stop command.
async fn shutdown_signal(console_stop: oneshot::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let console = async {
        // The sender is dropped when stdin closes; keep serving in that case.
        if console_stop.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = console => tracing::info!("Shutting down on operator command"),
    }
}
