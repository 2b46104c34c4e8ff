//! Value subsystem for siftql
//!
//! Models the untyped literals that ride in on filter conditions and the
//! strongly-typed values they coerce into.
//!
//! # Design Principles
//!
//! - Explicit shapes: a literal is a scalar or a list of scalars, nothing else
//! - Coercion returns a typed result-or-error per leaf kind, never panics
//! - One accepted timestamp format, no silent truncation of numerals

mod coerce;
mod errors;
mod literal;

pub use coerce::{coerce, coerce_list, TypedValue, TIMESTAMP_FORMAT};
pub use errors::{CoercionError, CoercionResult};
pub use literal::{Literal, Scalar};
