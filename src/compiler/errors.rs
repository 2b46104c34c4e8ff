//! Compile errors
//!
//! Any failure while compiling a filter condition aborts the whole call
//! and is wrapped with the originating field, operator, and value so the
//! transport layer can show it to a client or log it.

use thiserror::Error;

use super::ast::{FilterCondition, OperatorTag};
use crate::schema::SchemaError;
use crate::value::CoercionError;

/// Result type for compile operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while compiling filters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// A field path does not resolve against the descriptor
    #[error(transparent)]
    UnknownField(#[from] SchemaError),

    /// A literal cannot be converted to the field's kind
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// An operator applied to a kind that does not support it
    #[error("operator '{operator}' is not supported on {kind} fields")]
    UnsupportedOperator {
        /// Offending operator's wire name
        operator: &'static str,
        /// Kind name of the resolved field
        kind: &'static str,
    },

    /// Wrong literal shape for the operator
    #[error("invalid operand for '{operator}': {reason}")]
    InvalidOperand {
        /// Offending operator's wire name
        operator: &'static str,
        /// What was wrong with the operand
        reason: String,
    },

    /// Context wrapper naming the condition that failed
    #[error("invalid filter condition: {field} {operator} {value}: {source}")]
    InvalidFilter {
        /// Field path of the failing condition
        field: String,
        /// Operator of the failing condition
        operator: &'static str,
        /// Rendered value of the failing condition
        value: String,
        /// Underlying cause
        source: Box<CompileError>,
    },
}

impl CompileError {
    /// Create an unsupported-operator error
    pub fn unsupported_operator(operator: OperatorTag, kind: &'static str) -> Self {
        CompileError::UnsupportedOperator {
            operator: operator.as_str(),
            kind,
        }
    }

    /// Create an invalid-operand error
    pub fn invalid_operand(operator: OperatorTag, reason: impl Into<String>) -> Self {
        CompileError::InvalidOperand {
            operator: operator.as_str(),
            reason: reason.into(),
        }
    }

    /// Wrap an error with the condition it came from
    pub fn in_condition(self, condition: &FilterCondition) -> Self {
        CompileError::InvalidFilter {
            field: condition.field.clone(),
            operator: condition.operator.as_str(),
            value: condition.value.render(),
            source: Box::new(self),
        }
    }
}
