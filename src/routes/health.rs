// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides liveness and store-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring
//!
//! `/health` is pure liveness and never touches the store. `/ready` probes
//! the configured backend, so a load balancer stops routing traffic when
//! the store becomes unreachable.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;

use crate::server::AppState;
use crate::storage::RecipeStore;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(state)
    }

    /// Handle GET /health - liveness, no store access
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Handle GET /ready - readiness, probes the store
    async fn handle_ready(
        State(state): State<Arc<AppState>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let backend = state.store.backend_info();
        match state.store.list().await {
            Ok(_) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "store": backend,
                    "timestamp": Utc::now().to_rfc3339()
                })),
            ),
            Err(e) => {
                tracing::warn!("readiness probe failed: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "store": backend,
                        "timestamp": Utc::now().to_rfc3339()
                    })),
                )
            }
        }
    }
}
