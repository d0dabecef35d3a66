//! MCP Server Registry
//!
//! This module defines the output side of the seed pipeline: server
//! descriptors conforming to the registry's `server.schema.json`.

mod schema;
mod types;

pub use schema::*;
pub use types::*;
