// ABOUTME: Seed data loader for the recipe store service
// ABOUTME: Loads a JSON seed file into a configured store out-of-band
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed loader for the recipe store.
//!
//! Loads a seed file into a store without starting the HTTP server. Useful
//! for preparing a persistent database before first deployment.
//!
//! Usage:
//! ```bash
//! # Seed the default store from the default seed file
//! cargo run --bin seed-recipes
//!
//! # Seed a persistent database from a specific file
//! cargo run --bin seed-recipes -- --store-url sqlite:recipes.db --seed-path data/recipes.json
//! ```

use anyhow::Result;
use clap::Parser;
use recipes_api::{config::ServerConfig, logging, seed, storage::RecipeStore, storage::Store};
use tracing::info;

#[derive(Parser)]
#[command(name = "seed-recipes", about = "Recipe store seed loader")]
struct SeedArgs {
    /// Store URL override ("memory" or "sqlite:...")
    #[arg(long)]
    store_url: Option<String>,

    /// Seed file path override
    #[arg(long)]
    seed_path: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let store_url = args.store_url.unwrap_or(config.store_url);
    let seed_path = args.seed_path.unwrap_or(config.seed_path);

    let store = Store::open(&store_url).await?;
    info!("store backend: {}", store.backend_info());

    let records = seed::load_seed_file(&seed_path)?;
    info!("loaded {} records from {}", records.len(), seed_path.display());

    let inserted = store.seed(records).await?;
    if inserted > 0 {
        info!("seeded {inserted} recipes");
    } else {
        info!("store already populated, nothing inserted");
    }

    Ok(())
}
