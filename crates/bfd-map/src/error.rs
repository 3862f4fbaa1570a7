//! Error types for mapping operations.

use bfd_model::RecordType;
use thiserror::Error;

/// Failures while evaluating a function against the current context.
///
/// These abort the remainder of one `set_from_config` call; values mapped
/// before the failure are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("no encounter in the evaluation context")]
    MissingEncounter,
    #[error("no device in the evaluation context")]
    MissingDevice,
    #[error("encounter has no provider")]
    MissingProvider,
    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}

/// Specification rows that cannot be mapped for a record type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("line {line}: field {field} is not a {record_type} column")]
    UnknownField {
        line: usize,
        field: String,
        record_type: RecordType,
    },
}
