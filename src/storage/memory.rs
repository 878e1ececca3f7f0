// ABOUTME: In-memory storage backend for the recipe store service
// ABOUTME: Holds all records in a shared vector guarded by an async RwLock
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory recipe storage
//!
//! Keeps the whole collection in one `Vec` behind an async `RwLock`, so
//! concurrent handlers cannot interleave read-modify-write cycles. Insertion
//! order is vector order, which gives `list` its stable ordering for free.
//! Data lives only as long as the process.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{search_by_tag, RecipeStore, StoreError, StoreResult};
use crate::models::{Recipe, RecipePayload};

/// In-memory recipe store backed by a shared vector
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<Vec<Recipe>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create(&self, payload: RecipePayload) -> StoreResult<Recipe> {
        let recipe = Recipe::from_payload(Uuid::new_v4().to_string(), payload, Utc::now());
        let mut records = self.records.write().await;
        records.push(recipe.clone());
        Ok(recipe)
    }

    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.records.read().await.clone())
    }

    async fn update(&self, id: &str, payload: RecipePayload) -> StoreResult<Recipe> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        *record = Recipe::from_payload(record.id.clone(), payload, Utc::now());
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        records.remove(index);
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Recipe>> {
        let records = self.records.read().await;
        Ok(search_by_tag(&records, tag))
    }

    async fn seed(&self, records: Vec<Recipe>) -> StoreResult<usize> {
        let mut current = self.records.write().await;
        if !current.is_empty() {
            return Ok(0);
        }
        let count = records.len();
        *current = records;
        Ok(count)
    }
}
