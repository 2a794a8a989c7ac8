//! Request and response DTOs for waste resolution.

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceRecord;

/// A waste lookup request: which print type, and how large a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteRequest {
    /// Print type, e.g. "4/0" or "4/4".
    pub print_type: String,
    /// Requested run length; must be positive.
    pub print_run: u32,
}

/// The resolved waste estimate handed back to the caller.
///
/// Echoes the caller's requested run, not the matched row's run length;
/// the waste figures come from the matched row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteEstimate {
    pub print_type: String,
    pub print_run: u32,
    pub waste_sheets: u32,
    pub adjustment: Option<String>,
    pub is_special_case: bool,
}

impl WasteEstimate {
    /// Shape a response from the matched record and the originally requested run.
    pub fn from_match(record: &ReferenceRecord, requested_run: u32) -> Self {
        Self {
            print_type: record.print_type.clone(),
            print_run: requested_run,
            waste_sheets: record.waste_sheets,
            adjustment: record.adjustment.clone(),
            is_special_case: record.is_special_case,
        }
    }
}
