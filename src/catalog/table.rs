//! Catalog snapshots and the shared handle used to publish them.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use super::types::ReferenceRecord;

/// Immutable snapshot of the reference table, grouped by print type.
///
/// Each group is sorted ascending by run length at construction time;
/// nothing mutates a snapshot afterwards, so readers can share it freely.
pub struct Catalog {
    groups: BTreeMap<String, Vec<ReferenceRecord>>,
    total: usize,
}

impl Catalog {
    /// Build a snapshot from a flat record list.
    ///
    /// Duplicate run lengths within a print type are an upstream
    /// data-quality problem; they are logged and kept as-is.
    pub fn from_records(records: Vec<ReferenceRecord>) -> Self {
        let total = records.len();
        let mut groups: BTreeMap<String, Vec<ReferenceRecord>> = BTreeMap::new();

        for record in records {
            groups
                .entry(record.print_type.clone())
                .or_default()
                .push(record);
        }

        for (print_type, group) in groups.iter_mut() {
            group.sort_by_key(|r| r.run_length);
            for pair in group.windows(2) {
                if pair[0].run_length == pair[1].run_length {
                    warn!(
                        "Duplicate run length {} for print type {}; import data needs cleanup",
                        pair[0].run_length, print_type
                    );
                }
            }
        }

        info!(
            "Built catalog snapshot: {} records across {} print types",
            total,
            groups.len()
        );

        Self { groups, total }
    }

    /// Distinct print types, each exactly once, in sorted order.
    pub fn print_types(&self) -> Vec<&str> {
        self.groups.keys().map(|s| s.as_str()).collect()
    }

    /// All records for a print type, ascending by run length.
    /// Unknown types yield an empty slice.
    pub fn records_for(&self, print_type: &str) -> &[ReferenceRecord] {
        self.groups
            .get(print_type)
            .map(|g| g.as_slice())
            .unwrap_or(&[])
    }

    /// Total record count across all print types.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Shared handle to the current catalog snapshot.
///
/// Readers grab an `Arc` to the snapshot in place at call time; a
/// re-import publishes a whole new snapshot through `replace`, so no
/// reader ever observes a partially-updated table.
pub struct CatalogHandle {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot. Cheap; clones an `Arc`.
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().unwrap().clone()
    }

    /// Swap in a freshly built snapshot (bulk re-import path).
    pub fn replace(&self, catalog: Catalog) {
        let records = catalog.len();
        *self.current.write().unwrap() = Arc::new(catalog);
        info!("Replaced catalog snapshot ({} records)", records);
    }
}
