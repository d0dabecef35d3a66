//! Docker MCP Catalog
//!
//! This module defines the input side of the seed pipeline: the catalog
//! document produced by `docker mcp catalog show --format json`.

mod types;

pub use types::*;
