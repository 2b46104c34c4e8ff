//! Query execution subsystem for siftql
//!
//! The in-memory persistence side of the compiler: accepts a compiled
//! predicate tree and an ordered sort-key list and executes them against
//! JSON records.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter records strictly according to the predicate
//! 2. Apply the sort keys, stable and in order
//! 3. Slice the requested page
//! 4. Assemble the paginated response
//!
//! # Matching Rules
//!
//! A record with a missing field, a JSON null, or a stored value that
//! does not fit the field's declared kind never matches and sorts before
//! records that carry the field.

mod executor;
mod filters;
mod page;
mod sorter;

pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use page::Page;
pub use sorter::ResultSorter;
