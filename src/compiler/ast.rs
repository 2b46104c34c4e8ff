//! Request AST structures
//!
//! The JSON-shaped inputs handed to the compiler by the transport layer:
//! filter conditions, sort specifications, and pass-through pagination.

use serde::{Deserialize, Serialize};

use crate::value::Literal;

/// Default page when the request omits one
pub const DEFAULT_PAGE: u32 = 0;

/// Default page size when the request omits one
pub const DEFAULT_SIZE: u32 = 20;

/// Closed set of filter operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorTag {
    /// Equality
    Eq,
    /// Inequality
    Ne,
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Substring match on strings
    Like,
    /// Set membership
    In,
    /// Inclusive range
    Between,
}

impl OperatorTag {
    /// Returns the operator's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorTag::Eq => "eq",
            OperatorTag::Ne => "ne",
            OperatorTag::Gt => "gt",
            OperatorTag::Gte => "gte",
            OperatorTag::Lt => "lt",
            OperatorTag::Lte => "lte",
            OperatorTag::Like => "like",
            OperatorTag::In => "in",
            OperatorTag::Between => "between",
        }
    }
}

/// One filter condition: field path, operator, untyped value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Dotted field path
    pub field: String,
    /// Operator tag
    pub operator: OperatorTag,
    /// Untyped literal, scalar or list
    pub value: Literal,
}

impl FilterCondition {
    /// Create a filter condition
    pub fn new(field: impl Into<String>, operator: OperatorTag, value: Literal) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the direction's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse a requested direction string.
    ///
    /// Only a case-insensitive "desc" selects descending; a missing
    /// direction or any other string is ascending.
    pub fn parse(direction: Option<&str>) -> Self {
        match direction {
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// One sort specification as it arrives in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Dotted field path
    pub field: String,
    /// Requested direction; defaults to ascending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Accepted but not applied; entries sort in input order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl SortSpec {
    /// Create an ascending sort spec
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: None,
            priority: None,
        }
    }

    /// Create a descending sort spec
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some("desc".into()),
            priority: None,
        }
    }
}

/// Complete filter request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Filter conditions, all conjoined
    #[serde(default)]
    pub filters: Vec<FilterCondition>,
    /// Sort specifications in application order
    #[serde(default)]
    pub sort: Vec<SortSpec>,
    /// Zero-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;
    use serde_json::json;

    #[test]
    fn test_operator_wire_names_round_trip() {
        for (tag, name) in [
            (OperatorTag::Eq, "eq"),
            (OperatorTag::Ne, "ne"),
            (OperatorTag::Gt, "gt"),
            (OperatorTag::Gte, "gte"),
            (OperatorTag::Lt, "lt"),
            (OperatorTag::Lte, "lte"),
            (OperatorTag::Like, "like"),
            (OperatorTag::In, "in"),
            (OperatorTag::Between, "between"),
        ] {
            assert_eq!(tag.as_str(), name);
            let parsed: OperatorTag = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let result: Result<OperatorTag, _> = serde_json::from_value(json!("regex"));
        assert!(result.is_err());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(SortDirection::parse(None), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::parse(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::parse(Some("DESC")), SortDirection::Desc);
        // Anything that is not "desc" sorts ascending
        assert_eq!(SortDirection::parse(Some("downward")), SortDirection::Asc);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: FilterRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.filters.is_empty());
        assert!(request.sort.is_empty());
        assert_eq!(request.page, None);
        assert_eq!(request.size, None);
    }

    #[test]
    fn test_request_full_shape() {
        let request: FilterRequest = serde_json::from_value(json!({
            "filters": [
                {"field": "fullName", "operator": "like", "value": "Corp"},
                {"field": "annualTurnover", "operator": "between", "value": [10000, 50000]}
            ],
            "sort": [
                {"field": "fullName", "direction": "desc", "priority": 1}
            ],
            "page": 2,
            "size": 50
        }))
        .unwrap();

        assert_eq!(request.filters.len(), 2);
        assert_eq!(request.filters[0].operator, OperatorTag::Like);
        assert_eq!(
            request.filters[1].value.as_list().unwrap(),
            &[Scalar::Int(10000), Scalar::Int(50000)]
        );
        assert_eq!(request.sort[0].priority, Some(1));
        assert_eq!(request.page, Some(2));
        assert_eq!(request.size, Some(50));
    }
}
