//! Command line arguments and resolved run configuration.

use std::path::PathBuf;

use clap::Parser;
use mcpseed_core::branding;
use mcpseed_core::service::DEFAULT_DOCKER_PROGRAM;

/// Generate MCP registry seed data from the Docker MCP catalog.
#[derive(Debug, Parser)]
#[command(name = "mcpseed", version, about, long_about = None)]
pub struct Args {
    /// Read the catalog from this JSON file instead of running docker.
    #[arg(long, env = "MCPSEED_CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Program providing `mcp catalog show`.
    #[arg(long, env = "MCPSEED_DOCKER", default_value = DEFAULT_DOCKER_PROGRAM)]
    pub docker: String,

    /// Where to write the seed file.
    #[arg(short, long, env = "MCPSEED_OUTPUT", default_value = branding::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also emit remote (hosted) catalog entries.
    #[arg(long, env = "MCPSEED_INCLUDE_REMOTE")]
    pub include_remote: bool,
}

/// Where the catalog is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogInput {
    /// Run `<program> mcp catalog show --format json`
    Docker { program: String },
    /// Read a catalog JSON file
    File(PathBuf),
}

/// Resolved configuration for one seed run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub input: CatalogInput,
    pub output: PathBuf,
    pub include_remote: bool,
}

impl From<&Args> for SeedConfig {
    fn from(args: &Args) -> Self {
        let input = match &args.catalog_file {
            Some(path) => CatalogInput::File(path.clone()),
            None => CatalogInput::Docker {
                program: args.docker.clone(),
            },
        };

        Self {
            input,
            output: args.output.clone(),
            include_remote: args.include_remote,
        }
    }
}
