// ABOUTME: Route module organization for the recipe store HTTP endpoints
// ABOUTME: Route definitions are organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route modules for the recipe store service
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the storage layer.

/// Health check and readiness routes
pub mod health;
/// Recipe CRUD and search routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
