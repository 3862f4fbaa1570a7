//! Evaluation of one usable expression against a context.

use bfd_model::{ConfigEntry, RecordType};
use tracing::warn;

use crate::error::EvalError;
use crate::expression::{Expression, UNKNOWN_FUNCTION_SENTINEL};
use crate::functions::{FunctionInput, FunctionRegistry};

/// Strips comments, dispatches `[name]` references and passes literals
/// through. Distribution selection happens afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionEvaluator<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> ExpressionEvaluator<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /// Value of `expression` for `entry` under `record_type`.
    ///
    /// Unknown function names and code-like cells yield
    /// [`UNKNOWN_FUNCTION_SENTINEL`] and a warning instead of an error.
    ///
    /// # Errors
    ///
    /// Propagates [`EvalError`] from a function whose context object is
    /// missing.
    pub fn evaluate(
        &self,
        expression: &str,
        entry: &ConfigEntry,
        record_type: RecordType,
        input: &FunctionInput<'_>,
    ) -> Result<String, EvalError> {
        match Expression::parse(expression) {
            Expression::Blank => Ok(String::new()),
            Expression::Literal(value) => Ok(value.to_string()),
            Expression::Function(name) => match self.registry.get(name) {
                Some(function) => function.evaluate(input),
                None => Ok(unknown(expression, entry, record_type)),
            },
            Expression::Malformed => Ok(unknown(expression, entry, record_type)),
        }
    }

    /// Whether `expression` would evaluate to the unknown-function sentinel.
    pub fn is_unknown(&self, expression: &str) -> bool {
        match Expression::parse(expression) {
            Expression::Function(name) => !self.registry.contains(name),
            Expression::Malformed => true,
            Expression::Blank | Expression::Literal(_) => false,
        }
    }
}

fn unknown(expression: &str, entry: &ConfigEntry, record_type: RecordType) -> String {
    warn!(
        line = entry.line_number(),
        %record_type,
        field = entry.field(),
        expression,
        "unknown function in specification cell"
    );
    UNKNOWN_FUNCTION_SENTINEL.to_string()
}
