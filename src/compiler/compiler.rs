//! Compile orchestration
//!
//! One entry point over the predicate and order builders: resolve and
//! coerce every filter, conjoin, build sort keys, and hand both to the
//! persistence layer together with pass-through pagination.

use super::ast::{FilterCondition, FilterRequest, SortSpec, DEFAULT_PAGE, DEFAULT_SIZE};
use super::errors::CompileResult;
use super::order::{OrderBuilder, SortKey};
use super::predicate::{Predicate, PredicateBuilder};
use crate::schema::Descriptor;

/// A fully compiled request: predicate, sort keys, and pagination
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// Conjunction of all filter conditions
    pub predicate: Predicate,
    /// Sort keys in application order
    pub sort_keys: Vec<SortKey>,
    /// Zero-based page number, defaulted when absent
    pub page: u32,
    /// Page size, defaulted when absent
    pub size: u32,
}

/// Compiles filter requests against one schema descriptor.
///
/// Holds no mutable state; one compiler may serve concurrent callers.
pub struct FilterCompiler {
    descriptor: Descriptor,
}

impl FilterCompiler {
    /// Create a compiler over a descriptor
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }

    /// Returns the underlying descriptor
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Compile filters and sort specs into a predicate and sort-key list.
    ///
    /// Filters are fail-fast; sort specs are best-effort and never fail.
    pub fn compile(
        &self,
        filters: &[FilterCondition],
        sort: &[SortSpec],
    ) -> CompileResult<(Predicate, Vec<SortKey>)> {
        let predicate = PredicateBuilder::new(&self.descriptor).build(filters)?;
        let sort_keys = OrderBuilder::new(&self.descriptor).build(sort);
        Ok((predicate, sort_keys))
    }

    /// Compile a whole request body, defaulting absent pagination to
    /// page 0 / size 20
    pub fn compile_request(&self, request: &FilterRequest) -> CompileResult<CompiledQuery> {
        let (predicate, sort_keys) = self.compile(&request.filters, &request.sort)?;
        Ok(CompiledQuery {
            predicate,
            sort_keys,
            page: request.page.unwrap_or(DEFAULT_PAGE),
            size: request.size.unwrap_or(DEFAULT_SIZE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ast::OperatorTag;
    use crate::schema::FieldDef;
    use crate::value::{Literal, Scalar};

    fn sample_compiler() -> FilterCompiler {
        let descriptor = Descriptor::new()
            .field("fullName", FieldDef::string())
            .field("annualTurnover", FieldDef::double());
        FilterCompiler::new(descriptor)
    }

    #[test]
    fn test_empty_inputs_compile_to_match_all() {
        let compiler = sample_compiler();

        let (predicate, sort_keys) = compiler.compile(&[], &[]).unwrap();
        assert_eq!(predicate, Predicate::True);
        assert!(sort_keys.is_empty());
    }

    #[test]
    fn test_filter_error_aborts_sort_untouched() {
        let compiler = sample_compiler();

        let result = compiler.compile(
            &[FilterCondition::new(
                "unknown",
                OperatorTag::Eq,
                Literal::Scalar(Scalar::Str("x".into())),
            )],
            &[SortSpec::asc("fullName")],
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_request_pagination_defaults() {
        let compiler = sample_compiler();

        let compiled = compiler
            .compile_request(&FilterRequest::default())
            .unwrap();
        assert_eq!(compiled.page, 0);
        assert_eq!(compiled.size, 20);
    }

    #[test]
    fn test_request_pagination_passes_through() {
        let compiler = sample_compiler();

        let request = FilterRequest {
            page: Some(3),
            size: Some(50),
            ..Default::default()
        };
        let compiled = compiler.compile_request(&request).unwrap();
        assert_eq!(compiled.page, 3);
        assert_eq!(compiled.size, 50);
    }
}
