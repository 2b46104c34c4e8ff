//! Query execution over in-memory records
//!
//! Ties the filter and sorter together and slices the requested page.

use serde_json::Value;

use super::filters::PredicateFilter;
use super::page::Page;
use super::sorter::ResultSorter;
use crate::compiler::{Predicate, SortKey};

/// Executes compiled queries against record slices
pub struct QueryExecutor;

impl QueryExecutor {
    /// Filter, sort, and paginate records.
    ///
    /// `page` is zero-based; `totalPages` is `ceil(totalCount / size)`.
    /// A zero size yields an empty page.
    pub fn execute(
        records: &[Value],
        predicate: &Predicate,
        sort_keys: &[SortKey],
        page: u32,
        size: u32,
    ) -> Page {
        if size == 0 {
            return Page::empty(page);
        }

        let mut matched: Vec<Value> = records
            .iter()
            .filter(|r| PredicateFilter::matches(r, predicate))
            .cloned()
            .collect();
        ResultSorter::sort(&mut matched, sort_keys);

        let total_count = matched.len();
        let size = size as usize;
        let total_pages = total_count.div_ceil(size) as u32;

        let start = (page as usize).saturating_mul(size);
        let items: Vec<Value> = matched.into_iter().skip(start).take(size).collect();
        let page_item_count = items.len();

        Page {
            items,
            total_pages,
            total_count,
            page,
            page_item_count,
        }
    }

    /// Count the records a predicate matches
    pub fn count(records: &[Value], predicate: &Predicate) -> usize {
        records
            .iter()
            .filter(|r| PredicateFilter::matches(r, predicate))
            .count()
    }
}
