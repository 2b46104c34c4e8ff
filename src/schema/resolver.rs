//! Field path resolution
//!
//! Splits a dotted path on `.` and walks the descriptor segment by
//! segment, descending into nested sub-descriptors for non-leaf segments.
//! Resolution is exact: case-sensitive segments, no wildcards, and no
//! partial matching. The first segment that cannot be resolved fails the
//! whole path.

use super::errors::{SchemaError, SchemaResult};
use super::types::{Descriptor, FieldDef, LeafKind};

/// A field path paired with its resolved leaf kind.
///
/// Lives for one compile call; every resolved field inside a predicate or
/// sort key corresponds to a path that exists in the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    /// The dotted path as given by the caller
    pub path: String,
    /// The leaf kind the path resolves to
    pub kind: LeafKind,
}

impl ResolvedField {
    /// Returns the path segments for record lookup
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }
}

impl Descriptor {
    /// Resolve a dotted field path to its leaf kind.
    ///
    /// A path that ends on a nested object (rather than descending into
    /// it) is unresolvable: only leaves are queryable.
    pub fn resolve(&self, path: &str) -> SchemaResult<ResolvedField> {
        let segments: Vec<&str> = path.split('.').collect();
        let mut current = self;

        for (i, segment) in segments.iter().enumerate() {
            let is_last = i + 1 == segments.len();
            match current.get(segment) {
                Some(FieldDef::Leaf(kind)) if is_last => {
                    return Ok(ResolvedField {
                        path: path.to_string(),
                        kind: kind.clone(),
                    });
                }
                Some(FieldDef::Object(sub)) if !is_last => {
                    current = sub;
                }
                // Leaf with trailing segments, object as final segment,
                // or no such segment at all
                _ => return Err(SchemaError::unknown_field(path, *segment)),
            }
        }

        // split never yields zero segments for any input
        Err(SchemaError::unknown_field(path, path))
    }
}
