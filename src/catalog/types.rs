//! Type definitions for the reference waste catalog.
//!
//! These types support TOML deserialization (for loading catalog files)
//! and JSON serialization (for responses handed back to callers).

use serde::{Deserialize, Serialize};

/// Root document loaded from waste_catalog.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    /// Flat list of reference rows; grouping happens when the `Catalog`
    /// snapshot is built.
    pub records: Vec<ReferenceRecord>,
}

/// A single reference row: expected waste for one (print type, run length) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Front/back ink color counts, e.g. "4/0" (4-color front, no back).
    /// Not unique on its own; many rows share a type and differ by run length.
    pub print_type: String,
    /// Run length (tiragem) this row was measured or estimated for.
    pub run_length: u32,
    /// Expected setup/calibration waste in sheets for this type/run pair.
    pub waste_sheets: u32,
    /// Free-text note for the press operator, e.g. "adjust plates".
    #[serde(default)]
    pub adjustment: Option<String>,
    /// Marks rows needing manual attention beyond the standard estimate.
    #[serde(default)]
    pub is_special_case: bool,
}
