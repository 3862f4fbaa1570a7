//! Cell expression syntax.
//!
//! ```text
//! cell        := "" | sentinel | comment | literal | distribution | function
//! sentinel    := "NULL" | "Coded" | "N/A"      (case-insensitive)
//! comment     := "(" anything
//! distribution:= literal ("," literal)+
//! function    := "[" name "]" [ comment ]
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Value emitted for unknown functions and code-like cells.
pub const UNKNOWN_FUNCTION_SENTINEL: &str = "?";

/// Cells reserved for manual work or marked not applicable.
const SENTINELS: &[&str] = &["NULL", "Coded", "N/A"];

/// Bracketed literal that evaluates to an empty value.
const BLANK: &str = "[Blank]";

/// Method calls such as `fieldValues.put(...)` pasted into a cell. Matched on
/// the raw cell because comment stripping removes the argument list; the `(`
/// must follow the name directly, otherwise it opens a comment.
static MEMBER_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)+\(").expect("valid regex")
});

/// A specification cell, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression<'a> {
    /// `[Blank]` in any case.
    Blank,
    /// `[name]`; the name is not checked against any registry here.
    Function(&'a str),
    /// Bracketed text that is not a well-formed reference, or code.
    Malformed,
    /// Plain literal or comma-separated distribution.
    Literal(&'a str),
}

impl<'a> Expression<'a> {
    /// Classifies a raw cell. The comment is stripped here; literals and
    /// function names borrow from what remains.
    pub fn parse(cell: &'a str) -> Self {
        if MEMBER_CALL.is_match(cell) {
            return Expression::Malformed;
        }
        let stripped = strip_comment(cell);
        if stripped.eq_ignore_ascii_case(BLANK) {
            return Expression::Blank;
        }
        if let Some(rest) = stripped.strip_prefix('[') {
            return match rest.strip_suffix(']') {
                Some(name) if !name.is_empty() && !name.contains(['[', ']']) => {
                    Expression::Function(name)
                }
                _ => Expression::Malformed,
            };
        }
        if stripped.contains([';', '{', '}']) {
            return Expression::Malformed;
        }
        Expression::Literal(stripped)
    }
}

/// Drops everything from the first `(` and trims what is left.
pub fn strip_comment(expression: &str) -> &str {
    match expression.find('(') {
        Some(idx) => expression[..idx].trim(),
        None => expression.trim(),
    }
}

/// True for `NULL`, `Coded` and `N/A`, compared case-insensitively.
pub fn is_sentinel(stripped: &str) -> bool {
    SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(stripped))
}
