//! # MCP Seed Core Library
//!
//! Converts the Docker MCP catalog into MCP registry seed data.
//!
//! ## Modules
//!
//! - `branding` - Product constants and registry namespace (generated from branding.toml)
//! - `catalog` - Docker MCP catalog input types
//! - `registry` - MCP registry server descriptor types
//! - `transform` - Placeholder extraction and entry/batch transformation
//! - `service` - Catalog sources and seed file output
//! - `error` - Boundary error type

pub mod branding;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod service;
pub mod transform;

// Re-export commonly used types
pub use catalog::{CatalogEntry, DockerCatalog};
pub use error::{Result, SeedError};
pub use registry::ServerDescriptor;
pub use service::{
    decode_catalog, encode_seed, write_seed, CatalogSource, DockerCliCatalogSource,
    FileCatalogSource,
};
pub use transform::{transform_entry, BatchBuilder, ConfigIndex, EntryTransformer};
