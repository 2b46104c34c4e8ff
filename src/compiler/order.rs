//! Sort key construction
//!
//! Translates sort specifications into resolved sort keys. Unlike filter
//! compilation, this is best-effort: an entry whose field does not
//! resolve is dropped with a warning and the remaining entries still
//! apply. Ordering degrades gracefully rather than blocking the query.

use tracing::warn;

use super::ast::{SortDirection, SortSpec};
use crate::schema::{Descriptor, ResolvedField};

/// A resolved field plus direction, consumed by the persistence layer
/// verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    /// The resolved sort field
    pub field: ResolvedField,
    /// Sort direction
    pub direction: SortDirection,
}

/// Builds sort keys against a descriptor
pub struct OrderBuilder<'a> {
    descriptor: &'a Descriptor,
}

impl<'a> OrderBuilder<'a> {
    /// Create a builder over a descriptor
    pub fn new(descriptor: &'a Descriptor) -> Self {
        Self { descriptor }
    }

    /// Build sort keys in input order, dropping unresolvable entries.
    ///
    /// `priority` on a spec is accepted but does not reorder entries.
    pub fn build(&self, specs: &[SortSpec]) -> Vec<SortKey> {
        let mut keys = Vec::with_capacity(specs.len());

        for spec in specs {
            match self.descriptor.resolve(&spec.field) {
                Ok(field) => {
                    let direction = SortDirection::parse(spec.direction.as_deref());
                    keys.push(SortKey { field, direction });
                }
                Err(err) => {
                    warn!(field = %spec.field, %err, "dropping unresolvable sort entry");
                }
            }
        }

        keys
    }
}
