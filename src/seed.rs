// ABOUTME: Seed file loading for initial recipe data
// ABOUTME: Parses a JSON array of records and fills in server-owned fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed file loading
//!
//! The seed file is a JSON array of recipe records. Identifiers and
//! publication timestamps are optional in the file; missing ones are
//! assigned at load time so seeded records satisfy the same invariants as
//! created ones.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Recipe;

/// One record as it appears in the seed file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRecord {
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    published_at: Option<DateTime<Utc>>,
}

impl From<SeedRecord> for Recipe {
    fn from(record: SeedRecord) -> Self {
        Self {
            id: record
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: record.name,
            tags: record.tags,
            ingredients: record.ingredients,
            instructions: record.instructions,
            published_at: record.published_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Load seed records from the JSON file at `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// recipe records.
pub fn load_seed_file(path: &Path) -> Result<Vec<Recipe>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file: {}", path.display()))?;
    let records: Vec<SeedRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid seed file: {}", path.display()))?;
    Ok(records.into_iter().map(Recipe::from).collect())
}
