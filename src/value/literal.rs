//! Untyped filter literals
//!
//! A filter condition's `value` arrives as JSON: a bare scalar for most
//! operators, a list of scalars for `in` and `between`. Both shapes are
//! modeled explicitly; anything else is rejected at deserialization.

use serde::{Deserialize, Serialize};

/// A single untyped scalar as it appears in a request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON boolean
    Bool(bool),
    /// JSON integer
    Int(i64),
    /// JSON float
    Float(f64),
    /// JSON string
    Str(String),
}

impl Scalar {
    /// Canonical string form of the scalar, used as the input to every
    /// string-grammar coercion
    pub fn canonical(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Str(s) => s.clone(),
        }
    }
}

/// A filter value: one scalar, or a sequence of scalars for `in`/`between`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Single scalar value
    Scalar(Scalar),
    /// Sequence of scalar values
    List(Vec<Scalar>),
}

impl Literal {
    /// Returns the scalar list if this literal is a list
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Literal::List(items) => Some(items),
            Literal::Scalar(_) => None,
        }
    }

    /// Human-readable rendering for error messages
    pub fn render(&self) -> String {
        match self {
            Literal::Scalar(s) => s.canonical(),
            Literal::List(items) => {
                let parts: Vec<String> = items.iter().map(Scalar::canonical).collect();
                format!("[{}]", parts.join(", "))
            }
        }
    }
}

impl From<Scalar> for Literal {
    fn from(scalar: Scalar) -> Self {
        Literal::Scalar(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_scalar_shapes() {
        let s: Literal = serde_json::from_value(json!("Corp")).unwrap();
        assert_eq!(s, Literal::Scalar(Scalar::Str("Corp".into())));

        let i: Literal = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(i, Literal::Scalar(Scalar::Int(42)));

        let f: Literal = serde_json::from_value(json!(42.5)).unwrap();
        assert_eq!(f, Literal::Scalar(Scalar::Float(42.5)));

        let b: Literal = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(b, Literal::Scalar(Scalar::Bool(true)));
    }

    #[test]
    fn test_deserialize_list_shape() {
        let list: Literal = serde_json::from_value(json!([10000, 50000])).unwrap();
        assert_eq!(
            list,
            Literal::List(vec![Scalar::Int(10000), Scalar::Int(50000)])
        );
    }

    #[test]
    fn test_object_value_is_rejected() {
        let result: Result<Literal, _> = serde_json::from_value(json!({"a": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_canonical_forms() {
        assert_eq!(Scalar::Str("abc".into()).canonical(), "abc");
        assert_eq!(Scalar::Int(42).canonical(), "42");
        assert_eq!(Scalar::Float(42.5).canonical(), "42.5");
        assert_eq!(Scalar::Bool(true).canonical(), "true");
    }

    #[test]
    fn test_render_list() {
        let list = Literal::List(vec![Scalar::Int(1), Scalar::Str("x".into())]);
        assert_eq!(list.render(), "[1, x]");
    }

    #[test]
    fn test_as_list() {
        assert!(Literal::Scalar(Scalar::Int(1)).as_list().is_none());
        assert_eq!(
            Literal::List(vec![Scalar::Int(1)]).as_list().unwrap().len(),
            1
        );
    }
}
