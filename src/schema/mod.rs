//! Schema Descriptor subsystem for siftql
//!
//! The descriptor is the authoritative, read-only map from dotted field
//! paths to leaf kinds. It is built once at startup by the entity-mapping
//! layer and shared freely across concurrent compile calls.
//!
//! # Design Principles
//!
//! - Declarative: the compiler looks up, never introspects
//! - Immutable after construction, no interior mutability
//! - Exact matching: case-sensitive segments, no wildcards, no partial paths

mod errors;
mod resolver;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use resolver::ResolvedField;
pub use types::{Descriptor, EnumDef, FieldDef, LeafKind};
