//! Nearest-match resolution over the catalog.
//!
//! The engine rounds a requested run up to the smallest cataloged run
//! that covers it, so a shop never under-provisions setup waste.
//! Requests beyond the whole table fall back to the largest cataloged
//! run as a best-effort estimate instead of failing hard.

use tracing::debug;

use crate::catalog::{Catalog, CatalogHandle};
use crate::error::WasteError;

use super::types::{WasteEstimate, WasteRequest};

/// The waste resolution engine.
///
/// Holds a handle to the current catalog snapshot. Each call resolves
/// against exactly one snapshot, so results are a pure function of
/// (snapshot, request); a concurrent re-import never tears a lookup.
pub struct WasteEngine {
    catalog: CatalogHandle,
}

impl WasteEngine {
    /// Create an engine over an initial catalog snapshot.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: CatalogHandle::new(catalog),
        }
    }

    /// Resolve a waste estimate for the requested print type and run.
    ///
    /// Matching policy: scan the type's rows ascending by run length and
    /// take the first row whose run length covers the request. If the
    /// request exceeds every cataloged run, the largest row is used.
    ///
    /// # Returns
    /// * `Ok(WasteEstimate)` - Figures from the matched row, echoing the
    ///   caller's requested run
    /// * `Err(WasteError::InvalidRequest)` - Zero run or blank print type
    /// * `Err(WasteError::UnknownPrintType)` - No rows for that type
    pub fn resolve(&self, request: &WasteRequest) -> Result<WasteEstimate, WasteError> {
        if request.print_type.trim().is_empty() {
            return Err(WasteError::InvalidRequest(
                "print_type must not be empty".to_string(),
            ));
        }
        if request.print_run == 0 {
            return Err(WasteError::InvalidRequest(
                "print_run must be positive".to_string(),
            ));
        }

        let snapshot = self.catalog.snapshot();
        let group = snapshot.records_for(&request.print_type);
        if group.is_empty() {
            return Err(WasteError::UnknownPrintType(request.print_type.clone()));
        }

        // The group is sorted ascending, so the first covering row is the
        // smallest sufficient run.
        let matched = match group.iter().find(|r| r.run_length >= request.print_run) {
            Some(record) => record,
            // Request exceeds the whole table; the group is non-empty, so
            // the largest cataloged run is the best-effort estimate.
            None => &group[group.len() - 1],
        };

        debug!(
            "Resolved {} x {} against row with run {} ({} waste sheets)",
            request.print_type, request.print_run, matched.run_length, matched.waste_sheets
        );

        Ok(WasteEstimate::from_match(matched, request.print_run))
    }

    /// Distinct print types in the current snapshot, each exactly once.
    pub fn print_types(&self) -> Vec<String> {
        self.catalog
            .snapshot()
            .print_types()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Publish a freshly imported catalog. Lookups already holding the
    /// old snapshot finish against it; new lookups see the new one.
    pub fn replace_catalog(&self, catalog: Catalog) {
        self.catalog.replace(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceRecord;

    fn record(print_type: &str, run_length: u32, waste_sheets: u32) -> ReferenceRecord {
        ReferenceRecord {
            print_type: print_type.to_string(),
            run_length,
            waste_sheets,
            adjustment: None,
            is_special_case: false,
        }
    }

    fn make_engine() -> WasteEngine {
        let mut records = vec![
            record("4/0", 500, 30),
            record("4/0", 1000, 50),
            record("4/0", 2000, 80),
            record("4/0", 5000, 150),
            record("4/0", 10000, 250),
            record("1/1", 1000, 32),
        ];
        records.push(ReferenceRecord {
            print_type: "2/2".to_string(),
            run_length: 500,
            waste_sheets: 30,
            adjustment: Some("check front/back registration".to_string()),
            is_special_case: true,
        });
        WasteEngine::new(Catalog::from_records(records))
    }

    fn request(print_type: &str, print_run: u32) -> WasteRequest {
        WasteRequest {
            print_type: print_type.to_string(),
            print_run,
        }
    }

    #[test]
    fn test_rounds_up_to_smallest_sufficient_run() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("4/0", 750)).unwrap();

        assert_eq!(estimate.waste_sheets, 50, "Should match the 1000-run row");
        assert_eq!(estimate.print_run, 750, "Should echo the requested run");
    }

    #[test]
    fn test_exact_hit_returns_that_row() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("4/0", 1000)).unwrap();

        assert_eq!(estimate.waste_sheets, 50);
        assert_eq!(estimate.print_run, 1000);
    }

    #[test]
    fn test_request_beyond_table_falls_back_to_largest_run() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("4/0", 50000)).unwrap();

        assert_eq!(estimate.waste_sheets, 250, "Should fall back to the 10000-run row");
        assert_eq!(estimate.print_run, 50000);
    }

    #[test]
    fn test_request_below_smallest_run_matches_smallest() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("4/0", 100)).unwrap();

        assert_eq!(estimate.waste_sheets, 30, "Smallest sufficient run is 500");
    }

    #[test]
    fn test_unknown_print_type() {
        let engine = make_engine();
        let err = engine.resolve(&request("9/9", 1000)).unwrap_err();

        assert!(
            matches!(err, WasteError::UnknownPrintType(ref t) if t == "9/9"),
            "Expected UnknownPrintType, got {:?}",
            err
        );
    }

    #[test]
    fn test_special_case_flag_surfaces_unmodified() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("2/2", 500)).unwrap();

        assert!(estimate.is_special_case, "Special-case rows stay eligible matches");
        assert_eq!(
            estimate.adjustment.as_deref(),
            Some("check front/back registration")
        );
    }

    #[test]
    fn test_zero_run_is_invalid() {
        let engine = make_engine();
        let err = engine.resolve(&request("4/0", 0)).unwrap_err();
        assert!(matches!(err, WasteError::InvalidRequest(_)));
    }

    #[test]
    fn test_blank_print_type_is_invalid() {
        let engine = make_engine();

        let err = engine.resolve(&request("", 1000)).unwrap_err();
        assert!(matches!(err, WasteError::InvalidRequest(_)));

        let err = engine.resolve(&request("   ", 1000)).unwrap_err();
        assert!(matches!(err, WasteError::InvalidRequest(_)));
    }

    #[test]
    fn test_matching_stays_within_print_type() {
        let engine = make_engine();
        let estimate = engine.resolve(&request("1/1", 800)).unwrap();

        assert_eq!(estimate.waste_sheets, 32, "Must match 1/1 rows only");
        assert_eq!(estimate.print_type, "1/1");
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let engine = make_engine();
        let req = request("4/0", 3000);

        let first = engine.resolve(&req).unwrap();
        let second = engine.resolve(&req).unwrap();

        assert_eq!(first.waste_sheets, second.waste_sheets);
        assert_eq!(first.print_run, second.print_run);
        assert_eq!(first.is_special_case, second.is_special_case);
    }

    #[test]
    fn test_print_types_lists_each_type_once() {
        let engine = make_engine();
        let types = engine.print_types();

        assert_eq!(types, vec!["1/1", "2/2", "4/0"]);
    }

    #[test]
    fn test_replace_catalog_changes_results() {
        let engine = make_engine();
        assert_eq!(engine.resolve(&request("4/0", 750)).unwrap().waste_sheets, 50);

        engine.replace_catalog(Catalog::from_records(vec![record("4/0", 1000, 60)]));

        assert_eq!(
            engine.resolve(&request("4/0", 750)).unwrap().waste_sheets,
            60,
            "New snapshot should be fully visible after replace"
        );
        assert!(
            engine.resolve(&request("2/2", 500)).is_err(),
            "Types absent from the new snapshot should be gone"
        );
    }

    #[test]
    fn test_empty_catalog_reports_unknown_type() {
        let engine = WasteEngine::new(Catalog::from_records(Vec::new()));
        let err = engine.resolve(&request("4/0", 1000)).unwrap_err();
        assert!(matches!(err, WasteError::UnknownPrintType(_)));
    }
}
