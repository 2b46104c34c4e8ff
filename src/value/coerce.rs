//! Literal coercion into typed values
//!
//! Converts an untyped scalar into the representation a leaf kind
//! requires. A scalar whose native kind already matches the target is
//! used unchanged; everything else is parsed from the scalar's canonical
//! string form with the target grammar. Malformed input is an error,
//! never a truncation or a rounding.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;

use super::errors::{CoercionError, CoercionResult};
use super::literal::Scalar;
use crate::schema::LeafKind;

/// The single accepted timestamp format: ISO-8601 local date-time with
/// optional fractional seconds and no zone offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A coerced value, one variant per leaf kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// String kind
    Str(String),
    /// 32-bit integer kind
    Integer(i32),
    /// 64-bit integer kind
    Long(i64),
    /// 64-bit float kind
    Double(f64),
    /// 32-bit float kind
    Float(f32),
    /// Timestamp kind
    Timestamp(NaiveDateTime),
    /// Enumeration kind; ordinal is the member's declaration index
    Enum {
        /// Member name
        member: String,
        /// Position in the enumeration's declaration order
        ordinal: usize,
    },
}

impl TypedValue {
    /// Ordering between two values of the same kind.
    ///
    /// Returns `None` for mismatched variants; enums order by ordinal,
    /// floats by partial comparison.
    pub fn compare(&self, other: &TypedValue) -> Option<Ordering> {
        match (self, other) {
            (TypedValue::Str(a), TypedValue::Str(b)) => Some(a.cmp(b)),
            (TypedValue::Integer(a), TypedValue::Integer(b)) => Some(a.cmp(b)),
            (TypedValue::Long(a), TypedValue::Long(b)) => Some(a.cmp(b)),
            (TypedValue::Double(a), TypedValue::Double(b)) => a.partial_cmp(b),
            (TypedValue::Float(a), TypedValue::Float(b)) => a.partial_cmp(b),
            (TypedValue::Timestamp(a), TypedValue::Timestamp(b)) => Some(a.cmp(b)),
            (
                TypedValue::Enum { ordinal: a, .. },
                TypedValue::Enum { ordinal: b, .. },
            ) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Str(s) => write!(f, "{}", s),
            TypedValue::Integer(i) => write!(f, "{}", i),
            TypedValue::Long(l) => write!(f, "{}", l),
            TypedValue::Double(d) => write!(f, "{}", d),
            TypedValue::Float(x) => write!(f, "{}", x),
            TypedValue::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            TypedValue::Enum { member, .. } => write!(f, "{}", member),
        }
    }
}

/// Coerce one scalar into the representation required by a leaf kind
pub fn coerce(scalar: &Scalar, kind: &LeafKind) -> CoercionResult<TypedValue> {
    match kind {
        LeafKind::String => Ok(TypedValue::Str(scalar.canonical())),
        LeafKind::Integer => match scalar {
            Scalar::Int(i) => i32::try_from(*i)
                .map(TypedValue::Integer)
                .map_err(|_| mismatch(scalar, kind)),
            _ => scalar
                .canonical()
                .parse::<i32>()
                .map(TypedValue::Integer)
                .map_err(|_| mismatch(scalar, kind)),
        },
        LeafKind::Long => match scalar {
            Scalar::Int(i) => Ok(TypedValue::Long(*i)),
            _ => scalar
                .canonical()
                .parse::<i64>()
                .map(TypedValue::Long)
                .map_err(|_| mismatch(scalar, kind)),
        },
        LeafKind::Double => match scalar {
            Scalar::Float(x) => Ok(TypedValue::Double(*x)),
            _ => scalar
                .canonical()
                .parse::<f64>()
                .map(TypedValue::Double)
                .map_err(|_| mismatch(scalar, kind)),
        },
        LeafKind::Float => scalar
            .canonical()
            .parse::<f32>()
            .map(TypedValue::Float)
            .map_err(|_| mismatch(scalar, kind)),
        LeafKind::Timestamp => {
            NaiveDateTime::parse_from_str(&scalar.canonical(), TIMESTAMP_FORMAT)
                .map(TypedValue::Timestamp)
                .map_err(|_| mismatch(scalar, kind))
        }
        LeafKind::Enum(def) => {
            let member = scalar.canonical();
            match def.ordinal_of(&member) {
                Some(ordinal) => Ok(TypedValue::Enum { member, ordinal }),
                None => Err(CoercionError::new(
                    member,
                    format!("enum {}", def.name),
                )),
            }
        }
    }
}

/// Coerce every scalar in a list independently, failing on the first bad one
pub fn coerce_list(scalars: &[Scalar], kind: &LeafKind) -> CoercionResult<Vec<TypedValue>> {
    scalars.iter().map(|s| coerce(s, kind)).collect()
}

fn mismatch(scalar: &Scalar, kind: &LeafKind) -> CoercionError {
    CoercionError::new(scalar.canonical(), kind.kind_name())
}
