// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default HTTP port, matching the service's historical fixed port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default store URL (in-memory backend)
pub const DEFAULT_STORE_URL: &str = "memory";

/// Default seed file path, relative to the working directory
pub const DEFAULT_SEED_PATH: &str = "data/recipes.json";

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Store URL selecting the backend (`memory` or `sqlite:...`)
    pub store_url: String,
    /// Seed file with initial records, loaded once into an empty store
    pub seed_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HTTP_PORT`, `STORE_URL`, `SEED_PATH`. All are
    /// optional and fall back to the defaults above.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid HTTP_PORT: {value}"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let store_url = env::var("STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_owned());
        let seed_path = env::var("SEED_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEED_PATH));

        Ok(Self {
            http_port,
            store_url,
            seed_path,
        })
    }

    /// Get a summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} store_url={} seed_path={}",
            self.http_port,
            self.store_url,
            self.seed_path.display()
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            store_url: DEFAULT_STORE_URL.to_owned(),
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
        }
    }
}
