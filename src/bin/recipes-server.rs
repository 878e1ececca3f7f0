// ABOUTME: Server binary for the recipe store HTTP service
// ABOUTME: Loads configuration, initializes logging, and runs the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Store Server Binary
//!
//! Starts the recipe CRUD service with the storage backend selected by the
//! configured store URL.

use anyhow::Result;
use clap::Parser;
use recipes_api::{config::ServerConfig, logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipes-server")]
#[command(about = "Recipe store HTTP service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override store URL ("memory" or "sqlite:...")
    #[arg(long)]
    store_url: Option<String>,

    /// Override seed file path
    #[arg(long)]
    seed_path: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(store_url) = args.store_url {
        config.store_url = store_url;
    }
    if let Some(seed_path) = args.seed_path {
        config.seed_path = seed_path;
    }

    info!("starting recipe store service");
    info!("{}", config.summary());

    server::run(config).await
}
