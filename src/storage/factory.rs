// ABOUTME: Storage factory and backend selection for the recipe store service
// ABOUTME: Detects the backend from the store URL and dispatches trait calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage factory for creating recipe store backends
//!
//! The backend is detected from the configured store URL: `memory` selects
//! the in-process collection, `sqlite:` URLs the document database.

use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::memory::MemoryStore;
use super::sqlite::SqliteStore;
use super::{RecipeStore, StoreResult};
use crate::models::{Recipe, RecipePayload};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    Memory,
    Sqlite,
}

/// Store instance wrapper that delegates to the selected backend
#[derive(Debug, Clone)]
pub enum Store {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl Store {
    /// Open a store for the given URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names no known backend or the database
    /// cannot be opened. Callers are expected to treat this as fatal.
    pub async fn open(store_url: &str) -> Result<Self> {
        debug!("detecting store backend from URL: {}", store_url);
        let store_type = detect_store_type(store_url)?;
        info!("detected store backend: {:?}", store_type);

        match store_type {
            StoreType::Memory => Ok(Self::Memory(MemoryStore::new())),
            StoreType::Sqlite => {
                let store = SqliteStore::new(store_url).await?;
                info!("document database opened");
                Ok(Self::Sqlite(store))
            }
        }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "in-memory collection (non-persistent)",
            Self::Sqlite(_) => "SQLite document database",
        }
    }

    /// Get the backend type enum
    #[must_use]
    pub const fn store_type(&self) -> StoreType {
        match self {
            Self::Memory(_) => StoreType::Memory,
            Self::Sqlite(_) => StoreType::Sqlite,
        }
    }
}

/// Detect the storage backend from a store URL
///
/// # Errors
///
/// Returns an error for URLs that name no supported backend.
pub fn detect_store_type(store_url: &str) -> Result<StoreType> {
    if store_url == "memory" {
        Ok(StoreType::Memory)
    } else if store_url.starts_with("sqlite:") {
        Ok(StoreType::Sqlite)
    } else {
        bail!("unsupported store URL: {store_url} (expected \"memory\" or \"sqlite:...\")")
    }
}

#[async_trait]
impl RecipeStore for Store {
    async fn create(&self, payload: RecipePayload) -> StoreResult<Recipe> {
        match self {
            Self::Memory(store) => store.create(payload).await,
            Self::Sqlite(store) => store.create(payload).await,
        }
    }

    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        match self {
            Self::Memory(store) => store.list().await,
            Self::Sqlite(store) => store.list().await,
        }
    }

    async fn update(&self, id: &str, payload: RecipePayload) -> StoreResult<Recipe> {
        match self {
            Self::Memory(store) => store.update(id, payload).await,
            Self::Sqlite(store) => store.update(id, payload).await,
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        match self {
            Self::Memory(store) => store.delete(id).await,
            Self::Sqlite(store) => store.delete(id).await,
        }
    }

    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Recipe>> {
        match self {
            Self::Memory(store) => store.find_by_tag(tag).await,
            Self::Sqlite(store) => store.find_by_tag(tag).await,
        }
    }

    async fn seed(&self, records: Vec<Recipe>) -> StoreResult<usize> {
        match self {
            Self::Memory(store) => store.seed(records).await,
            Self::Sqlite(store) => store.seed(records).await,
        }
    }
}
