//! Paginated response shape

use serde::Serialize;
use serde_json::Value;

/// One page of query results, serialized in the wire's camelCase shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Records on this page, in sorted order
    pub items: Vec<Value>,
    /// Total pages for the matched set at this page size
    pub total_pages: u32,
    /// Total matched records across all pages
    pub total_count: usize,
    /// Zero-based page number
    pub page: u32,
    /// Number of records on this page
    pub page_item_count: usize,
}

impl Page {
    /// Create an empty page
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            total_count: 0,
            page,
            page_item_count: 0,
        }
    }

    /// Returns true if this page carries no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
