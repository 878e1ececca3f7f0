// ABOUTME: Route handlers for the recipe REST API
// ABOUTME: Provides create, list, update, delete, and tag search endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe routes
//!
//! Every handler follows the same shape: bind the request, call the store,
//! serialize the result. Validation failures and unknown identifiers are
//! both 400s; backend failures are 500s carrying the driver message.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    errors::AppError,
    models::{Recipe, RecipePayload},
    server::AppState,
    storage::RecipeStore,
};

/// Confirmation message returned by delete
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Query parameters for tag search
#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    /// Tag to match, case-insensitive; missing means match nothing
    #[serde(default)]
    pub tag: String,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/recipes", post(Self::handle_create).get(Self::handle_list))
            .route("/recipes/search", get(Self::handle_search))
            .route(
                "/recipes/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(state)
    }

    /// Handle POST /recipes - create a recipe
    async fn handle_create(
        State(state): State<Arc<AppState>>,
        payload: Result<Json<RecipePayload>, JsonRejection>,
    ) -> Result<Json<Recipe>, AppError> {
        let Json(payload) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let recipe = state.store.create(payload).await?;
        info!("created recipe {}", recipe.id);
        Ok(Json(recipe))
    }

    /// Handle GET /recipes - list all recipes in insertion order
    async fn handle_list(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<Vec<Recipe>>, AppError> {
        let recipes = state.store.list().await?;
        Ok(Json(recipes))
    }

    /// Handle PUT /recipes/:id - replace a recipe's fields
    async fn handle_update(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
        payload: Result<Json<RecipePayload>, JsonRejection>,
    ) -> Result<Json<Recipe>, AppError> {
        let Json(payload) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let recipe = state.store.update(&id, payload).await?;
        info!("updated recipe {id}");
        Ok(Json(recipe))
    }

    /// Handle DELETE /recipes/:id - remove a recipe
    async fn handle_delete(
        State(state): State<Arc<AppState>>,
        Path(id): Path<String>,
    ) -> Result<Json<MessageResponse>, AppError> {
        state.store.delete(&id).await?;
        info!("deleted recipe {id}");
        Ok(Json(MessageResponse {
            message: "recipe deleted".to_owned(),
        }))
    }

    /// Handle GET /recipes/search?tag=X - case-insensitive tag search
    ///
    /// A missing or empty `tag` matches nothing and returns an empty array
    /// with status 200, same as any other non-matching query.
    async fn handle_search(
        State(state): State<Arc<AppState>>,
        Query(query): Query<SearchQuery>,
    ) -> Result<Json<Vec<Recipe>>, AppError> {
        let recipes = state.store.find_by_tag(&query.tag).await?;
        Ok(Json(recipes))
    }
}
