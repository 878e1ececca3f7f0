// ABOUTME: Router assembly and server lifecycle for the recipe store service
// ABOUTME: Opens the store, seeds it once, and runs the HTTP accept loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly and lifecycle
//!
//! Startup order matters: the store must open before anything is served (a
//! failed open aborts the process), and seeding happens exactly once, before
//! the first request can observe the collection.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::routes::{HealthRoutes, RecipeRoutes};
use crate::seed;
use crate::storage::{RecipeStore, Store};

/// Shared state handed to every route handler
pub struct AppState {
    /// The selected storage backend
    pub store: Store,
}

/// Build the full application router
pub fn router(state: Arc<AppState>) -> Router {
    RecipeRoutes::routes(state.clone())
        .merge(HealthRoutes::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Open the configured store and seed it from the seed file if empty
///
/// A missing seed file is not an error; the service starts with an empty
/// collection. An unreadable or malformed seed file is.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the seed file exists
/// but cannot be loaded.
pub async fn open_store(config: &ServerConfig) -> Result<Store> {
    let store = Store::open(&config.store_url)
        .await
        .with_context(|| format!("failed to open store: {}", config.store_url))?;
    info!("store backend: {}", store.backend_info());

    if config.seed_path.exists() {
        let records = seed::load_seed_file(&config.seed_path)?;
        let inserted = store
            .seed(records)
            .await
            .context("failed to seed the store")?;
        if inserted > 0 {
            info!("seeded {inserted} recipes from {}", config.seed_path.display());
        } else {
            info!("store already populated, seed file skipped");
        }
    } else {
        warn!(
            "seed file {} not found, starting with an empty collection",
            config.seed_path.display()
        );
    }

    Ok(store)
}

/// Run the server until shutdown
///
/// # Errors
///
/// Returns an error if the store cannot be opened and seeded, the listen
/// port cannot be bound, or the accept loop fails.
pub async fn run(config: ServerConfig) -> Result<()> {
    let store = open_store(&config).await?;
    let state = Arc::new(AppState { store });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("recipe store listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
