//! Configuration-driven field mapping for claims export records.
//!
//! A tab-separated specification names, per output field and record type, an
//! expression: a literal, a comma-separated distribution, a `[function]`
//! reference, or a placeholder. [`FieldMappingEngine`] evaluates every
//! usable expression against a person (and optionally an encounter and a
//! device) and fills a [`FieldValueMap`](bfd_model::FieldValueMap).
//!
//! ```ignore
//! let engine = FieldMappingEngine::load(&spec_path, &carrier_path, MappingOptions::new())?;
//! let mut values = FieldValueMap::new();
//! let mut rng = seeded_rng(person.seed);
//! engine.set_from_person(RecordType::Beneficiary, &mut values, &person, &mut rng);
//! ```

#![deny(unsafe_code)]

pub mod distribution;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod filter;
pub mod functions;
pub mod resolver;
pub mod spec;

pub use distribution::{seeded_rng, select_distribution};
pub use engine::{FieldMappingEngine, MappingTally};
pub use error::{EvalError, MappingError};
pub use evaluator::ExpressionEvaluator;
pub use expression::{Expression, UNKNOWN_FUNCTION_SENTINEL, strip_comment};
pub use filter::should_add;
pub use functions::{FieldFunction, FnFunction, FunctionInput, FunctionRegistry};
pub use resolver::{expression_by_type, field_by_type};
pub use spec::{ExportSpec, IssueKind, SpecIssue, SpecReport};
