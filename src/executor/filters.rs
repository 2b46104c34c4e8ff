//! Predicate evaluation against JSON records
//!
//! Walks a record along each predicate's resolved path, reads the stored
//! value strictly as the field's declared kind, and applies the
//! operator's semantics. Missing fields and nulls never match.

use std::cmp::Ordering;

use serde_json::Value;

use crate::compiler::{CmpOp, Predicate};
use crate::schema::{LeafKind, ResolvedField};
use crate::value::{TypedValue, TIMESTAMP_FORMAT};

/// Evaluates compiled predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks whether a record matches a predicate tree
    pub fn matches(record: &Value, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::True => true,
            Predicate::And(atoms) => atoms.iter().all(|p| Self::matches(record, p)),
            Predicate::Eq { field, value } => {
                Self::read_field(record, field).is_some_and(|v| v == *value)
            }
            Predicate::Ne { field, value } => {
                Self::read_field(record, field).is_some_and(|v| v != *value)
            }
            Predicate::Cmp { field, op, value } => Self::read_field(record, field)
                .and_then(|v| v.compare(value))
                .is_some_and(|ordering| match op {
                    CmpOp::Gt => ordering == Ordering::Greater,
                    CmpOp::Gte => ordering != Ordering::Less,
                    CmpOp::Lt => ordering == Ordering::Less,
                    CmpOp::Lte => ordering != Ordering::Greater,
                }),
            Predicate::Like { field, pattern } => {
                match Self::read_field(record, field) {
                    Some(TypedValue::Str(s)) => like_match(&s, pattern),
                    _ => false,
                }
            }
            Predicate::In { field, values } => {
                Self::read_field(record, field).is_some_and(|v| values.contains(&v))
            }
            Predicate::Between {
                field,
                lower,
                upper,
            } => Self::read_field(record, field).is_some_and(|v| {
                let above = v.compare(lower) == Some(Ordering::Greater)
                    || v.compare(lower) == Some(Ordering::Equal);
                let below = v.compare(upper) == Some(Ordering::Less)
                    || v.compare(upper) == Some(Ordering::Equal);
                above && below
            }),
        }
    }

    /// Reads a record's value at the field's path, strictly as the
    /// declared kind. Missing segments, nulls, and ill-typed stored
    /// values read as `None`.
    pub fn read_field(record: &Value, field: &ResolvedField) -> Option<TypedValue> {
        let mut current = record;
        for segment in field.segments() {
            current = current.get(segment)?;
        }
        if current.is_null() {
            return None;
        }

        match &field.kind {
            LeafKind::String => current.as_str().map(|s| TypedValue::Str(s.to_string())),
            LeafKind::Integer => current
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(TypedValue::Integer),
            LeafKind::Long => current.as_i64().map(TypedValue::Long),
            LeafKind::Double => current.as_f64().map(TypedValue::Double),
            LeafKind::Float => current.as_f64().map(|x| TypedValue::Float(x as f32)),
            LeafKind::Timestamp => current.as_str().and_then(|s| {
                chrono::NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                    .ok()
                    .map(TypedValue::Timestamp)
            }),
            LeafKind::Enum(def) => current.as_str().and_then(|s| {
                def.ordinal_of(s).map(|ordinal| TypedValue::Enum {
                    member: s.to_string(),
                    ordinal,
                })
            }),
        }
    }
}

/// Substring-style pattern matching with `%` wildcards at either end
fn like_match(value: &str, pattern: &str) -> bool {
    let open_start = pattern.starts_with('%');
    let open_end = pattern.len() > 1 && pattern.ends_with('%');
    let needle = pattern.trim_start_matches('%').trim_end_matches('%');

    match (open_start, open_end) {
        (true, true) => value.contains(needle),
        (true, false) => value.ends_with(needle),
        (false, true) => value.starts_with(needle),
        (false, false) => value == needle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{FilterCondition, OperatorTag, PredicateBuilder};
    use crate::schema::{Descriptor, FieldDef};
    use crate::value::{Literal, Scalar};
    use serde_json::json;

    fn sample_descriptor() -> Descriptor {
        let address = Descriptor::new().field("street", FieldDef::string());

        Descriptor::new()
            .field("fullName", FieldDef::string())
            .field("employeesCount", FieldDef::integer())
            .field("annualTurnover", FieldDef::double())
            .field("creationDate", FieldDef::timestamp())
            .field(
                "type",
                FieldDef::enumeration("OrganizationType", &["COMMERCIAL", "PUBLIC", "PRIVATE"]),
            )
            .field("postalAddress", FieldDef::object(address))
    }

    fn build(field: &str, operator: OperatorTag, value: Literal) -> Predicate {
        let descriptor = sample_descriptor();
        PredicateBuilder::new(&descriptor)
            .build_condition(&FilterCondition::new(field, operator, value))
            .unwrap()
    }

    fn org() -> Value {
        json!({
            "fullName": "Acme Corp",
            "employeesCount": 120,
            "annualTurnover": 25000.0,
            "creationDate": "2020-06-01T09:00:00",
            "type": "COMMERCIAL",
            "postalAddress": {"street": "Main St"}
        })
    }

    #[test]
    fn test_true_matches_everything() {
        assert!(PredicateFilter::matches(&org(), &Predicate::True));
        assert!(PredicateFilter::matches(&json!({}), &Predicate::True));
    }

    #[test]
    fn test_eq_and_ne() {
        let eq = build(
            "fullName",
            OperatorTag::Eq,
            Literal::Scalar(Scalar::Str("Acme Corp".into())),
        );
        assert!(PredicateFilter::matches(&org(), &eq));
        assert!(!PredicateFilter::matches(
            &json!({"fullName": "Other"}),
            &eq
        ));

        let ne = build(
            "fullName",
            OperatorTag::Ne,
            Literal::Scalar(Scalar::Str("Other".into())),
        );
        assert!(PredicateFilter::matches(&org(), &ne));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let ne = build(
            "fullName",
            OperatorTag::Ne,
            Literal::Scalar(Scalar::Str("Other".into())),
        );
        assert!(!PredicateFilter::matches(&json!({}), &ne));
        assert!(!PredicateFilter::matches(&json!({"fullName": null}), &ne));
    }

    #[test]
    fn test_range_comparison() {
        let gte = build(
            "employeesCount",
            OperatorTag::Gte,
            Literal::Scalar(Scalar::Int(100)),
        );
        assert!(PredicateFilter::matches(&org(), &gte));

        let lt = build(
            "employeesCount",
            OperatorTag::Lt,
            Literal::Scalar(Scalar::Int(100)),
        );
        assert!(!PredicateFilter::matches(&org(), &lt));
    }

    #[test]
    fn test_timestamp_comparison() {
        let after = build(
            "creationDate",
            OperatorTag::Gt,
            Literal::Scalar(Scalar::Str("2020-01-01T00:00:00".into())),
        );
        assert!(PredicateFilter::matches(&org(), &after));
    }

    #[test]
    fn test_enum_ordering_by_declaration() {
        // COMMERCIAL is declared before PUBLIC
        let lt = build(
            "type",
            OperatorTag::Lt,
            Literal::Scalar(Scalar::Str("PUBLIC".into())),
        );
        assert!(PredicateFilter::matches(&org(), &lt));
    }

    #[test]
    fn test_like_is_substring() {
        let like = build(
            "fullName",
            OperatorTag::Like,
            Literal::Scalar(Scalar::Str("Corp".into())),
        );
        assert!(PredicateFilter::matches(&org(), &like));
        assert!(!PredicateFilter::matches(
            &json!({"fullName": "Widgets Ltd"}),
            &like
        ));
    }

    #[test]
    fn test_in_membership() {
        let within = build(
            "type",
            OperatorTag::In,
            Literal::List(vec![
                Scalar::Str("COMMERCIAL".into()),
                Scalar::Str("PRIVATE".into()),
            ]),
        );
        assert!(PredicateFilter::matches(&org(), &within));
        assert!(!PredicateFilter::matches(&json!({"type": "PUBLIC"}), &within));
    }

    #[test]
    fn test_between_is_inclusive() {
        let range = build(
            "annualTurnover",
            OperatorTag::Between,
            Literal::List(vec![Scalar::Int(10000), Scalar::Int(50000)]),
        );
        assert!(PredicateFilter::matches(&org(), &range));
        assert!(PredicateFilter::matches(
            &json!({"annualTurnover": 10000.0}),
            &range
        ));
        assert!(PredicateFilter::matches(
            &json!({"annualTurnover": 50000.0}),
            &range
        ));
        assert!(!PredicateFilter::matches(
            &json!({"annualTurnover": 50000.5}),
            &range
        ));
    }

    #[test]
    fn test_inverted_between_selects_nothing() {
        let range = build(
            "annualTurnover",
            OperatorTag::Between,
            Literal::List(vec![Scalar::Int(50000), Scalar::Int(10000)]),
        );
        assert!(!PredicateFilter::matches(&org(), &range));
        assert!(!PredicateFilter::matches(
            &json!({"annualTurnover": 10000.0}),
            &range
        ));
        assert!(!PredicateFilter::matches(
            &json!({"annualTurnover": 50000.0}),
            &range
        ));
    }

    #[test]
    fn test_nested_path_lookup() {
        let eq = build(
            "postalAddress.street",
            OperatorTag::Eq,
            Literal::Scalar(Scalar::Str("Main St".into())),
        );
        assert!(PredicateFilter::matches(&org(), &eq));
        assert!(!PredicateFilter::matches(&json!({"postalAddress": {}}), &eq));
    }

    #[test]
    fn test_ill_typed_stored_value_never_matches() {
        let gte = build(
            "employeesCount",
            OperatorTag::Gte,
            Literal::Scalar(Scalar::Int(0)),
        );
        // Stored as string, declared integer
        assert!(!PredicateFilter::matches(
            &json!({"employeesCount": "120"}),
            &gte
        ));
    }

    #[test]
    fn test_conjunction_semantics() {
        let descriptor = sample_descriptor();
        let predicate = PredicateBuilder::new(&descriptor)
            .build(&[
                FilterCondition::new(
                    "fullName",
                    OperatorTag::Like,
                    Literal::Scalar(Scalar::Str("Corp".into())),
                ),
                FilterCondition::new(
                    "employeesCount",
                    OperatorTag::Gt,
                    Literal::Scalar(Scalar::Int(100)),
                ),
            ])
            .unwrap();

        assert!(PredicateFilter::matches(&org(), &predicate));
        assert!(!PredicateFilter::matches(
            &json!({"fullName": "Acme Corp", "employeesCount": 50}),
            &predicate
        ));
    }

    #[test]
    fn test_like_match_wildcards() {
        assert!(like_match("Johnson", "%son"));
        assert!(like_match("Sonata", "Son%"));
        assert!(like_match("Masonry", "%son%"));
        assert!(!like_match("Smith", "%son%"));
        assert!(like_match("exact", "exact"));
        assert!(like_match("anything", "%"));
    }
}
