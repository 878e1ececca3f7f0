// ABOUTME: Storage abstraction layer for the recipe store service
// ABOUTME: Plugin architecture with in-memory and SQLite document backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage abstraction for recipe records
//!
//! All storage implementations expose the same five collection operations
//! plus one-shot seeding, so the HTTP layer never knows which backend is
//! behind it. Lookups go through the public `id` field of the record, never
//! a backend-private key.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Recipe, RecipePayload};

pub mod factory;
pub mod memory;
pub mod sqlite;

pub use factory::Store;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors surfaced by storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record carries the requested identifier
    #[error("recipe {0} not found")]
    NotFound(String),
    /// A stored document could not be encoded or decoded
    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The database driver reported a failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    /// Any other backend failure
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Core storage abstraction trait
///
/// All backends must implement this trait to provide a consistent
/// interface for the HTTP layer.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Persist a new record with a fresh identifier and timestamp
    async fn create(&self, payload: RecipePayload) -> StoreResult<Recipe>;

    /// Return every record in insertion order
    async fn list(&self) -> StoreResult<Vec<Recipe>>;

    /// Replace all client-controlled fields of the record with the given id
    ///
    /// The identifier is preserved and the publication timestamp refreshed.
    /// Fails with [`StoreError::NotFound`] when no record carries the id.
    async fn update(&self, id: &str, payload: RecipePayload) -> StoreResult<Recipe>;

    /// Remove the record with the given id
    ///
    /// Fails with [`StoreError::NotFound`] when no record carries the id.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Return all records with at least one tag equal to `tag`, ignoring case
    ///
    /// Results preserve collection order, with one entry per matching tag: a
    /// record whose tag list matches the query twice appears twice. That is
    /// the long-standing behavior of this API and clients depend on it.
    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Recipe>>;

    /// Bulk-insert `records` only if the store is currently empty
    ///
    /// Returns the number of records inserted, zero when the store already
    /// holds data.
    async fn seed(&self, records: Vec<Recipe>) -> StoreResult<usize>;
}

/// Expand `records` into tag-search results for `tag`
///
/// Shared by backends so both produce identical search semantics, including
/// the one-entry-per-matching-tag expansion.
pub(crate) fn search_by_tag(records: &[Recipe], tag: &str) -> Vec<Recipe> {
    let mut matches = Vec::new();
    for record in records {
        for _ in 0..record.matching_tag_count(tag) {
            matches.push(record.clone());
        }
    }
    matches
}
