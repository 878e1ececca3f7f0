// ABOUTME: Core data model for the recipe store service
// ABOUTME: Defines the Recipe record and the client-facing request payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recipe record and request payload types
//!
//! A `Recipe` is a flat value object with no internal state transitions.
//! The identifier and publication timestamp are always server-assigned;
//! clients only control the name and the three ordered string sequences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recipe record as stored and served over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier, server-assigned on create
    pub id: String,
    /// Display name
    pub name: String,
    /// Tags for search, order-preserving
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient list, order-preserving
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps, order-preserving
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Publication timestamp, refreshed on every write
    pub published_at: DateTime<Utc>,
}

/// Client-supplied recipe fields for create and update requests
///
/// Any `id` or `publishedAt` keys in the request body are accepted and
/// discarded; the server owns both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipePayload {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Tags for search
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Build a record from a payload with a server-assigned identity
    pub fn from_payload(id: String, payload: RecipePayload, published_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            tags: payload.tags,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            published_at,
        }
    }

    /// Number of tags on this record equal to `tag`, ignoring case
    ///
    /// Search emits one result entry per matching tag, so the count matters,
    /// not just presence.
    pub fn matching_tag_count(&self, tag: &str) -> usize {
        let needle = tag.to_lowercase();
        self.tags
            .iter()
            .filter(|t| t.to_lowercase() == needle)
            .count()
    }
}
