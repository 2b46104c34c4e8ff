//! siftql - A typed filter-and-sort query compiler
//!
//! Turns field-agnostic filter conditions (`field`, `operator`, `value`
//! triples) and sort requests into a type-checked predicate tree and an
//! ordered sort-key list, resolved against a static schema descriptor.
//! The `executor` module evaluates compiled queries against in-memory
//! JSON records, including pagination.

pub mod compiler;
pub mod executor;
pub mod schema;
pub mod value;
