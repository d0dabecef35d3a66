//! Catalog to registry transformation engine
//!
//! - `placeholder` - `{{name|modifier}}` extraction and canonicalization
//! - `config_index` - description lookup for extracted variables
//! - `entry` - one catalog entry to one server descriptor
//! - `batch` - whole-catalog conversion with entry filtering
//!
//! Everything here is pure and synchronous: entries share no state, and
//! malformed templates never fail a transformation.

mod batch;
mod config_index;
mod entry;
pub mod placeholder;

pub use batch::BatchBuilder;
pub use config_index::ConfigIndex;
pub use entry::{transform_entry, EntryTransformer};
pub use placeholder::{Placeholder, TemplatedValue};
