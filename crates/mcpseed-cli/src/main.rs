//! # mcpseed
//!
//! Reads the Docker MCP catalog and writes MCP registry seed data.

mod config;
mod logging;

use anyhow::Context as _;
use clap::Parser;
use mcpseed_core::{
    write_seed, BatchBuilder, CatalogSource, DockerCliCatalogSource, FileCatalogSource,
};

use crate::config::{Args, CatalogInput, SeedConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let args = Args::parse();
    let config = SeedConfig::from(&args);
    run(&config).await
}

async fn run(config: &SeedConfig) -> anyhow::Result<()> {
    let source: Box<dyn CatalogSource> = match &config.input {
        CatalogInput::Docker { program } => Box::new(DockerCliCatalogSource::new(program.as_str())),
        CatalogInput::File(path) => Box::new(FileCatalogSource::new(path)),
    };

    let catalog = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

    let servers = BatchBuilder::new()
        .include_remote(config.include_remote)
        .build(&catalog);

    write_seed(&config.output, &servers)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!("Successfully created {}", config.output.display());
    Ok(())
}
