//! Schema resolution errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while resolving field paths against a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A path segment does not exist in the descriptor
    #[error("unknown field '{path}': segment '{segment}' does not resolve")]
    UnknownField {
        /// Full dotted path as given by the caller
        path: String,
        /// First segment that failed to resolve
        segment: String,
    },
}

impl SchemaError {
    /// Create an unknown-field error
    pub fn unknown_field(path: impl Into<String>, segment: impl Into<String>) -> Self {
        SchemaError::UnknownField {
            path: path.into(),
            segment: segment.into(),
        }
    }
}
