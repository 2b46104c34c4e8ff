//! Predicate construction
//!
//! Operator dispatch: one atomic predicate per filter condition, checked
//! against the resolved field's kind and carrying already-coerced values.
//! The full filter list reduces by conjunction; no filters compiles to a
//! predicate matching every record.

use tracing::debug;

use super::ast::{FilterCondition, OperatorTag};
use super::errors::{CompileError, CompileResult};
use crate::schema::{Descriptor, LeafKind, ResolvedField};
use crate::value::{coerce, coerce_list, Literal, TypedValue};

/// Ordered comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// Strictly greater
    Gt,
    /// Greater or equal
    Gte,
    /// Strictly less
    Lt,
    /// Less or equal
    Lte,
}

/// A composable boolean expression over resolved fields and coerced values.
///
/// Invariants upheld at construction: every field exists in the
/// descriptor, every value matches its field's kind, `Between` carries
/// exactly two bounds, `In` carries at least one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every record
    True,
    /// Conjunction of sub-predicates
    And(Vec<Predicate>),
    /// Equality
    Eq {
        field: ResolvedField,
        value: TypedValue,
    },
    /// Inequality
    Ne {
        field: ResolvedField,
        value: TypedValue,
    },
    /// Ordered comparison on an orderable kind
    Cmp {
        field: ResolvedField,
        op: CmpOp,
        value: TypedValue,
    },
    /// Substring match on a string field; pattern is `%value%`
    Like {
        field: ResolvedField,
        pattern: String,
    },
    /// Set membership
    In {
        field: ResolvedField,
        values: Vec<TypedValue>,
    },
    /// Inclusive range on an orderable kind
    Between {
        field: ResolvedField,
        lower: TypedValue,
        upper: TypedValue,
    },
}

/// Builds atomic predicates and their conjunction against a descriptor
pub struct PredicateBuilder<'a> {
    descriptor: &'a Descriptor,
}

impl<'a> PredicateBuilder<'a> {
    /// Create a builder over a descriptor
    pub fn new(descriptor: &'a Descriptor) -> Self {
        Self { descriptor }
    }

    /// Compile the whole filter list into one conjunctive predicate.
    ///
    /// Fail-fast: the first bad condition aborts, wrapped with its
    /// originating field/operator/value. An empty list selects every
    /// record, not none.
    pub fn build(&self, filters: &[FilterCondition]) -> CompileResult<Predicate> {
        if filters.is_empty() {
            return Ok(Predicate::True);
        }

        let mut atoms = Vec::with_capacity(filters.len());
        for condition in filters {
            let atom = self
                .build_condition(condition)
                .map_err(|e| e.in_condition(condition))?;
            atoms.push(atom);
        }

        if atoms.len() == 1 {
            Ok(atoms.pop().unwrap_or(Predicate::True))
        } else {
            Ok(Predicate::And(atoms))
        }
    }

    /// Compile one filter condition into an atomic predicate
    pub fn build_condition(&self, condition: &FilterCondition) -> CompileResult<Predicate> {
        let field = self.descriptor.resolve(&condition.field)?;
        debug!(
            field = %field.path,
            kind = field.kind.kind_name(),
            operator = condition.operator.as_str(),
            "compiling filter condition"
        );

        match condition.operator {
            OperatorTag::Eq => {
                let value = coerce_scalar(&condition.value, &field.kind, condition.operator)?;
                Ok(Predicate::Eq { field, value })
            }
            OperatorTag::Ne => {
                let value = coerce_scalar(&condition.value, &field.kind, condition.operator)?;
                Ok(Predicate::Ne { field, value })
            }
            OperatorTag::Gt | OperatorTag::Gte | OperatorTag::Lt | OperatorTag::Lte => {
                require_orderable(&field.kind, condition.operator)?;
                let value = coerce_scalar(&condition.value, &field.kind, condition.operator)?;
                let op = match condition.operator {
                    OperatorTag::Gt => CmpOp::Gt,
                    OperatorTag::Gte => CmpOp::Gte,
                    OperatorTag::Lt => CmpOp::Lt,
                    _ => CmpOp::Lte,
                };
                Ok(Predicate::Cmp { field, op, value })
            }
            OperatorTag::Like => {
                if field.kind != LeafKind::String {
                    return Err(CompileError::unsupported_operator(
                        condition.operator,
                        field.kind.kind_name(),
                    ));
                }
                let value = coerce_scalar(&condition.value, &field.kind, condition.operator)?;
                Ok(Predicate::Like {
                    field,
                    pattern: format!("%{}%", value),
                })
            }
            OperatorTag::In => {
                let items = condition.value.as_list().ok_or_else(|| {
                    CompileError::invalid_operand(
                        condition.operator,
                        "requires a list of values",
                    )
                })?;
                if items.is_empty() {
                    return Err(CompileError::invalid_operand(
                        condition.operator,
                        "requires at least one value",
                    ));
                }
                let values = coerce_list(items, &field.kind)?;
                Ok(Predicate::In { field, values })
            }
            OperatorTag::Between => {
                let items = condition.value.as_list().ok_or_else(|| {
                    CompileError::invalid_operand(
                        condition.operator,
                        "requires a list of two values",
                    )
                })?;
                if items.len() != 2 {
                    return Err(CompileError::invalid_operand(
                        condition.operator,
                        format!("requires exactly two values, got {}", items.len()),
                    ));
                }
                require_orderable(&field.kind, condition.operator)?;
                // Bounds coerce independently; lower <= upper is not
                // enforced, an inverted range selects nothing
                let mut bounds = coerce_list(items, &field.kind)?;
                let upper = bounds.pop().unwrap_or(TypedValue::Integer(0));
                let lower = bounds.pop().unwrap_or(TypedValue::Integer(0));
                Ok(Predicate::Between {
                    field,
                    lower,
                    upper,
                })
            }
        }
    }
}

fn coerce_scalar(
    literal: &Literal,
    kind: &LeafKind,
    operator: OperatorTag,
) -> CompileResult<TypedValue> {
    match literal {
        Literal::Scalar(scalar) => Ok(coerce(scalar, kind)?),
        Literal::List(_) => Err(CompileError::invalid_operand(
            operator,
            "requires a single value, got a list",
        )),
    }
}

fn require_orderable(kind: &LeafKind, operator: OperatorTag) -> CompileResult<()> {
    if kind.is_orderable() {
        Ok(())
    } else {
        Err(CompileError::unsupported_operator(
            operator,
            kind.kind_name(),
        ))
    }
}
