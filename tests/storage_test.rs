// ABOUTME: Conformance tests for the RecipeStore trait implementations
// ABOUTME: Runs the same behavioral suite against the memory and SQLite backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Backend conformance tests
//!
//! Both backends must behave identically through the `RecipeStore` trait;
//! each behavioral check below runs against memory and SQLite.

use chrono::Utc;
use recipes_api::models::{Recipe, RecipePayload};
use recipes_api::storage::{MemoryStore, RecipeStore, SqliteStore, Store, StoreError};
use uuid::Uuid;

fn payload(name: &str, tags: &[&str]) -> RecipePayload {
    RecipePayload {
        name: name.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        ..RecipePayload::default()
    }
}

fn seed_record(name: &str, tags: &[&str]) -> Recipe {
    Recipe {
        id: Uuid::new_v4().to_string(),
        name: name.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        ingredients: Vec::new(),
        instructions: Vec::new(),
        published_at: Utc::now(),
    }
}

async fn all_backends() -> Vec<Store> {
    vec![
        Store::Memory(MemoryStore::new()),
        Store::Sqlite(SqliteStore::new("sqlite::memory:").await.unwrap()),
    ]
}

#[tokio::test]
async fn test_create_assigns_unique_ids_and_timestamps() {
    for store in all_backends().await {
        let before = Utc::now();
        let first = store.create(payload("Pasta", &["Italian"])).await.unwrap();
        let second = store.create(payload("Toast", &[])).await.unwrap();

        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(first.published_at >= before);
    }
}

#[tokio::test]
async fn test_list_returns_records_in_insertion_order() {
    for store in all_backends().await {
        store.create(payload("First", &[])).await.unwrap();
        store.create(payload("Second", &[])).await.unwrap();
        store.create(payload("Third", &[])).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }
}

#[tokio::test]
async fn test_update_replaces_fields_and_refreshes_timestamp() {
    for store in all_backends().await {
        let created = store.create(payload("Pasta", &["Italian"])).await.unwrap();

        let updated = store
            .update(&created.id, payload("Pasta Carbonara", &["Italian", "Rich"]))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Pasta Carbonara");
        assert_eq!(updated.tags, vec!["Italian", "Rich"]);
        assert!(updated.published_at >= created.published_at);

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], updated);
    }
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    for store in all_backends().await {
        store.create(payload("Pasta", &[])).await.unwrap();

        let err = store.update("missing", payload("Ghost", &[])).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref id) if id == "missing"));

        // Collection unchanged.
        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pasta");
    }
}

#[tokio::test]
async fn test_delete_removes_record_and_is_not_repeatable() {
    for store in all_backends().await {
        let created = store.create(payload("Pasta", &[])).await.unwrap();

        store.delete(&created.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());

        let err = store.delete(&created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}

#[tokio::test]
async fn test_find_by_tag_matches_case_insensitively_in_order() {
    for store in all_backends().await {
        store.create(payload("Pasta", &["Italian", "Quick"])).await.unwrap();
        store.create(payload("Guacamole", &["Mexican"])).await.unwrap();
        store.create(payload("Risotto", &["italian"])).await.unwrap();

        let matches = store.find_by_tag("ITALIAN").await.unwrap();
        let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Pasta", "Risotto"]);

        assert!(store.find_by_tag("Vegan").await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_find_by_tag_emits_one_entry_per_matching_tag() {
    for store in all_backends().await {
        store
            .create(payload("Mousse", &["Dessert", "dessert", "French"]))
            .await
            .unwrap();

        let matches = store.find_by_tag("Dessert").await.unwrap();
        assert_eq!(matches.len(), 2);
    }
}

#[tokio::test]
async fn test_seed_populates_only_an_empty_store() {
    for store in all_backends().await {
        let inserted = store
            .seed(vec![seed_record("Pasta", &["Italian"]), seed_record("Toast", &[])])
            .await
            .unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.list().await.unwrap().len(), 2);

        // A second seed is a no-op.
        let inserted = store.seed(vec![seed_record("Ghost", &[])]).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}

#[tokio::test]
async fn test_sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("recipes.db").display());

    let created = {
        let store = SqliteStore::new(&url).await.unwrap();
        store.create(payload("Pasta", &["Italian"])).await.unwrap()
    };

    let store = SqliteStore::new(&url).await.unwrap();
    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], created);
}
