//! Reference waste catalog: the read-only quantities table.
//!
//! # Architecture
//!
//! - **Records**: Loaded from TOML (embedded default, or a file produced
//!   by the import tooling)
//! - **Snapshot**: Grouped by print type, each group sorted ascending by
//!   run length; immutable once built
//! - **Replace**: A re-import publishes a whole new snapshot through
//!   `CatalogHandle`, never mutating rows in place

mod loader;
mod table;
mod types;

pub use loader::{default_catalog, load_catalog};
pub use table::{Catalog, CatalogHandle};
pub use types::{CatalogDocument, ReferenceRecord};
