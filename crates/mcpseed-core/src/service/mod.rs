//! Pipeline boundary services: loading the catalog and writing the seed.

mod catalog_source;
mod seed_writer;

pub use catalog_source::*;
pub use seed_writer::*;
