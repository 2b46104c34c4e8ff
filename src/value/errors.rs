//! Coercion errors

use thiserror::Error;

/// Result type for coercion operations
pub type CoercionResult<T> = Result<T, CoercionError>;

/// A literal could not be converted to a field's required kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot coerce '{value}' to {target}")]
pub struct CoercionError {
    /// Canonical string form of the offending literal
    pub value: String,
    /// Target kind description (kind name, or enum name with members)
    pub target: String,
}

impl CoercionError {
    /// Create a coercion error
    pub fn new(value: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            target: target.into(),
        }
    }
}
