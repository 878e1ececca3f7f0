// ABOUTME: Main library entry point for the recipe store HTTP service
// ABOUTME: Exposes models, storage backends, routes, and server plumbing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Recipes API
//!
//! A small CRUD service for recipe records with two interchangeable storage
//! backends: an in-process collection for development and testing, and a
//! SQLite-backed document store for persistence. The backend is selected at
//! startup from the configured store URL.
//!
//! ## Architecture
//!
//! - **Models**: the `Recipe` record and its request payload
//! - **Storage**: the `RecipeStore` trait with memory and document backends
//! - **Routes**: Axum handlers for the `/recipes` HTTP surface
//! - **Server**: router assembly, startup seeding, and the accept loop
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipes_api::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     recipes_api::server::run(config).await
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Unified error types and HTTP error responses
pub mod errors;

/// Logging configuration and subscriber setup
pub mod logging;

/// Recipe record and request payload types
pub mod models;

/// HTTP route handlers organized by domain
pub mod routes;

/// Seed file loading for startup population
pub mod seed;

/// Router assembly and server lifecycle
pub mod server;

/// Storage abstraction with memory and document backends
pub mod storage;
