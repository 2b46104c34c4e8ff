//! Filter Compiler subsystem for siftql
//!
//! Compiles field-agnostic filter conditions and sort requests into a
//! typed predicate tree plus an ordered sort-key list.
//!
//! # Compilation Flow (strict order)
//!
//! 1. Resolve each filter's field path against the schema descriptor
//! 2. Check operator legality for the resolved leaf kind
//! 3. Coerce the literal (element-wise for list operands)
//! 4. Conjoin the atomic predicates; no filters selects every record
//! 5. Build sort keys best-effort, dropping unresolvable entries
//!
//! # Error Policy
//!
//! Filter compilation is fail-fast: the first bad condition aborts the
//! whole call, wrapped with the offending field/operator/value. Sort
//! compilation never fails: a bad entry is dropped and the rest proceed.
//! The asymmetry is deliberate: filtering is a correctness gate, ordering
//! is a refinement.

mod ast;
mod compiler;
mod errors;
mod order;
mod predicate;

pub use ast::{
    FilterCondition, FilterRequest, OperatorTag, SortDirection, SortSpec, DEFAULT_PAGE,
    DEFAULT_SIZE,
};
pub use compiler::{CompiledQuery, FilterCompiler};
pub use errors::{CompileError, CompileResult};
pub use order::{OrderBuilder, SortKey};
pub use predicate::{CmpOp, Predicate, PredicateBuilder};
