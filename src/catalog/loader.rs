//! TOML catalog loading.
//!
//! Provides two loading methods:
//! - `default_catalog()` - Loads the embedded catalog compiled into the binary
//! - `load_catalog(path)` - Loads a catalog file produced by the import tooling

use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::table::Catalog;
use super::types::CatalogDocument;

/// Default catalog embedded in the binary at compile time.
/// Loaded from `config/waste_catalog.toml`.
const DEFAULT_CATALOG: &str = include_str!("../../config/waste_catalog.toml");

/// Load a catalog from a TOML file at the given path.
///
/// # Arguments
/// * `path` - Path to the TOML file containing `[[records]]` entries
///
/// # Returns
/// * `Ok(Catalog)` - Grouped, sorted catalog snapshot
/// * `Err` - If the file cannot be read or the TOML is invalid
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let doc: CatalogDocument = toml::from_str(&content)?;
    info!("Loaded {} catalog records from {:?}", doc.records.len(), path);
    Ok(Catalog::from_records(doc.records))
}

/// Get the catalog embedded in the binary.
///
/// Covers the shop's standard offset configurations (1/0 through 4/4)
/// at the cataloged run lengths.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_catalog() -> Catalog {
    let doc: CatalogDocument =
        toml::from_str(DEFAULT_CATALOG).expect("embedded waste_catalog.toml must be valid TOML");
    Catalog::from_records(doc.records)
}
