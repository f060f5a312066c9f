//! Process startup: pool, readiness gate, listener, graceful shutdown.

use crate::config::Config;
use crate::routes::app;
use crate::state::AppState;
use crate::store::{ensure_database_exists, PgWordStore, WordStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Connect, create the table, then accept requests. The listener is bound only
/// after `init` succeeds, so no request can observe a missing table.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.create_database {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    let store = PgWordStore::new(pool);
    if let Err(e) = store.init().await {
        tracing::error!(error = %e, "failed to initialize words table");
        return Err(e.into());
    }

    let state = AppState::new(Arc::new(store));
    let router = app(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

