//! Record sorting for query execution
//!
//! Applies a compiled sort-key list to records, stable and in key order:
//! later keys only break ties left by earlier ones.

use std::cmp::Ordering;

use serde_json::Value;

use super::filters::PredicateFilter;
use crate::compiler::{SortDirection, SortKey};

/// Sorts records by compiled sort keys
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort-key list.
    ///
    /// The sort is stable; an empty key list leaves input order intact.
    /// Records missing a key's field order before records that have it,
    /// and descending reverses that key's ordering only.
    pub fn sort(records: &mut [Value], sort_keys: &[SortKey]) {
        if sort_keys.is_empty() {
            return;
        }

        records.sort_by(|a, b| {
            for key in sort_keys {
                let a_val = PredicateFilter::read_field(a, &key.field);
                let b_val = PredicateFilter::read_field(b, &key.field);

                let ordering = match (a_val, b_val) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (Some(av), Some(bv)) => av.compare(&bv).unwrap_or(Ordering::Equal),
                };

                let ordering = match key.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };

                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
    }
}
