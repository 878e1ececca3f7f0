// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exposes the in-process Axum request driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod axum_test;
