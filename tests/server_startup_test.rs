// ABOUTME: Integration tests for server startup store opening and seeding
// ABOUTME: Covers seed file loading, the seed-once rule, and fatal open errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use recipes_api::config::ServerConfig;
use recipes_api::server::open_store;
use recipes_api::storage::RecipeStore;

const SEED_JSON: &str = r#"[
    {"name": "Pasta", "tags": ["Italian", "Quick"]},
    {"name": "Guacamole", "tags": ["Mexican"]}
]"#;

fn config(store_url: &str, seed_path: PathBuf) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        store_url: store_url.to_owned(),
        seed_path,
    }
}

#[tokio::test]
async fn test_open_store_seeds_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("recipes.json");
    fs::write(&seed_path, SEED_JSON).unwrap();

    let store = open_store(&config("memory", seed_path)).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Pasta");
    assert!(!records[0].id.is_empty());
}

#[tokio::test]
async fn test_open_store_without_seed_file_starts_empty() {
    let store = open_store(&config("memory", PathBuf::from("missing/recipes.json")))
        .await
        .unwrap();

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_store_seeds_persistent_store_only_once() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("recipes.json");
    fs::write(&seed_path, SEED_JSON).unwrap();
    let url = format!("sqlite:{}", dir.path().join("recipes.db").display());

    let store = open_store(&config(&url, seed_path.clone())).await.unwrap();
    let first_ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(first_ids.len(), 2);
    drop(store);

    // Reopening finds data and must not seed again.
    let store = open_store(&config(&url, seed_path)).await.unwrap();
    let second_ids: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_open_store_rejects_unknown_backend() {
    let err = open_store(&config("mongodb://localhost", PathBuf::from("x.json")))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed to open store"));
}

#[tokio::test]
async fn test_open_store_fails_on_malformed_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let seed_path = dir.path().join("recipes.json");
    fs::write(&seed_path, "{ not an array").unwrap();

    assert!(open_store(&config("memory", seed_path)).await.is_err());
}
