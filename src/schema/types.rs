//! Schema type definitions
//!
//! Supported leaf kinds:
//! - string: UTF-8 string
//! - integer: 32-bit signed integer
//! - long: 64-bit signed integer
//! - double: 64-bit floating point
//! - float: 32-bit floating point
//! - timestamp: ISO-8601 local date-time (no zone offset)
//! - enum: closed set of named members, ordered by declaration
//!
//! Nested objects carry their own sub-descriptor and are reached through
//! dotted paths (`postalAddress.street`).

use std::collections::HashMap;

/// A declared enumeration: name plus ordered member names.
///
/// Member order is significant: it defines the enumeration's ordering for
/// range operators (first member sorts lowest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enumeration name, used in error messages
    pub name: String,
    /// Member names in declaration order
    pub members: Vec<String>,
}

impl EnumDef {
    /// Create an enumeration definition
    pub fn new(name: impl Into<String>, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: members.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Returns the ordinal of a member by exact, case-sensitive name match
    pub fn ordinal_of(&self, member: &str) -> Option<usize> {
        self.members.iter().position(|m| m == member)
    }
}

/// The scalar kind a field path ultimately resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum LeafKind {
    /// UTF-8 string
    String,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 64-bit floating point
    Double,
    /// 32-bit floating point
    Float,
    /// ISO-8601 local date-time
    Timestamp,
    /// Enumeration of named members
    Enum(EnumDef),
}

impl LeafKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            LeafKind::String => "string",
            LeafKind::Integer => "integer",
            LeafKind::Long => "long",
            LeafKind::Double => "double",
            LeafKind::Float => "float",
            LeafKind::Timestamp => "timestamp",
            LeafKind::Enum(_) => "enum",
        }
    }

    /// Returns true if range operators (gt/gte/lt/lte/between) apply.
    ///
    /// Strings are deliberately not orderable here: range filters on text
    /// are rejected rather than silently collating.
    pub fn is_orderable(&self) -> bool {
        !matches!(self, LeafKind::String)
    }
}

/// A field definition: either a leaf or a nested object with its own fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDef {
    /// Scalar leaf of the given kind
    Leaf(LeafKind),
    /// Nested object reached by a path segment
    Object(Descriptor),
}

impl FieldDef {
    /// Create a string leaf
    pub fn string() -> Self {
        FieldDef::Leaf(LeafKind::String)
    }

    /// Create a 32-bit integer leaf
    pub fn integer() -> Self {
        FieldDef::Leaf(LeafKind::Integer)
    }

    /// Create a 64-bit integer leaf
    pub fn long() -> Self {
        FieldDef::Leaf(LeafKind::Long)
    }

    /// Create a 64-bit float leaf
    pub fn double() -> Self {
        FieldDef::Leaf(LeafKind::Double)
    }

    /// Create a 32-bit float leaf
    pub fn float() -> Self {
        FieldDef::Leaf(LeafKind::Float)
    }

    /// Create a timestamp leaf
    pub fn timestamp() -> Self {
        FieldDef::Leaf(LeafKind::Timestamp)
    }

    /// Create an enumeration leaf
    pub fn enumeration(name: impl Into<String>, members: &[&str]) -> Self {
        FieldDef::Leaf(LeafKind::Enum(EnumDef::new(name, members)))
    }

    /// Create a nested object field
    pub fn object(descriptor: Descriptor) -> Self {
        FieldDef::Object(descriptor)
    }
}

/// Complete descriptor of a queryable entity.
///
/// Built once at process start, never mutated afterward; safe to share
/// across concurrent compile calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
    /// Field definitions keyed by segment name
    fields: HashMap<String, FieldDef>,
}

impl Descriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field definition, builder style
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.fields.insert(name.into(), def);
        self
    }

    /// Look up a single segment by exact name
    pub fn get(&self, segment: &str) -> Option<&FieldDef> {
        self.fields.get(segment)
    }

    /// Returns the number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
