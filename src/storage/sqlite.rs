// ABOUTME: SQLite-backed document storage for the recipe store service
// ABOUTME: Persists each recipe as one JSON document keyed by its public id
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite document storage
//!
//! Each recipe is stored as a single JSON document in one row, keyed by the
//! record's public `id` field. Every operation is one SQL statement on one
//! row, so writes are atomic at single-record granularity without explicit
//! transactions. Listing orders by `rowid`, which is insertion order.

use std::str::FromStr;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{search_by_tag, RecipeStore, StoreError, StoreResult};
use crate::models::{Recipe, RecipePayload};

/// SQLite-backed recipe store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (and create if missing) the database at `database_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the database cannot be
    /// opened, or the schema cannot be created.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("invalid database URL: {database_url}"))?
            .create_if_missing(true);

        // A pooled `:memory:` database is one database per connection; a
        // single connection keeps every caller on the same store.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database: {database_url}"))?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Create the document table if it does not exist
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                document TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .context("failed to create recipes table")?;
        Ok(())
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Recipe>> {
        let rows = sqlx::query("SELECT document FROM recipes ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let document: String = row.get("document");
            records.push(serde_json::from_str(&document)?);
        }
        Ok(records)
    }

    async fn insert(&self, recipe: &Recipe) -> StoreResult<()> {
        let document = serde_json::to_string(recipe)?;
        sqlx::query("INSERT INTO recipes (id, document) VALUES (?1, ?2)")
            .bind(&recipe.id)
            .bind(document)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for SqliteStore {
    async fn create(&self, payload: RecipePayload) -> StoreResult<Recipe> {
        let recipe = Recipe::from_payload(Uuid::new_v4().to_string(), payload, Utc::now());
        self.insert(&recipe).await?;
        Ok(recipe)
    }

    async fn list(&self) -> StoreResult<Vec<Recipe>> {
        self.fetch_all().await
    }

    async fn update(&self, id: &str, payload: RecipePayload) -> StoreResult<Recipe> {
        let recipe = Recipe::from_payload(id.to_owned(), payload, Utc::now());
        let document = serde_json::to_string(&recipe)?;

        let result = sqlx::query("UPDATE recipes SET document = ?2 WHERE id = ?1")
            .bind(id)
            .bind(document)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(recipe)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }

    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Recipe>> {
        let records = self.fetch_all().await?;
        Ok(search_by_tag(&records, tag))
    }

    async fn seed(&self, records: Vec<Recipe>) -> StoreResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for recipe in &records {
            let document = serde_json::to_string(recipe)?;
            sqlx::query("INSERT INTO recipes (id, document) VALUES (?1, ?2)")
                .bind(&recipe.id)
                .bind(document)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(records.len())
    }
}
