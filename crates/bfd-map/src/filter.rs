//! Decides which specification cells take part in mapping.

use bfd_model::{ConfigEntry, RecordType};
use tracing::debug;

use crate::expression::{is_sentinel, strip_comment};

/// Whether `expression` is usable for `entry` under `record_type`.
///
/// Rejects blank cells, the `NULL` / `Coded` / `N/A` placeholders (with or
/// without a trailing comment) and comment-only cells. Everything else,
/// including function references, is accepted.
pub fn should_add(expression: &str, entry: &ConfigEntry, record_type: RecordType) -> bool {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return false;
    }
    if is_sentinel(strip_comment(trimmed)) {
        return false;
    }
    if is_comment_only(trimmed) {
        debug!(
            line = entry.line_number(),
            %record_type,
            field = entry.field(),
            "ignoring comment-only cell"
        );
        return false;
    }
    true
}

/// A cell that holds only an analyst note.
pub fn is_comment_only(expression: &str) -> bool {
    expression.trim_start().starts_with('(')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ConfigEntry {
        ConfigEntry::new(7, "BENE_RACE_CD")
    }

    fn accepts(expression: &str) -> bool {
        should_add(expression, &entry(), RecordType::Beneficiary)
    }

    #[test]
    fn rejects_blank_and_placeholders() {
        assert!(!accepts(""));
        assert!(!accepts("   "));
        assert!(!accepts("NULL"));
        assert!(!accepts("null"));
        assert!(!accepts("Coded"));
        assert!(!accepts(" CODED "));
        assert!(!accepts("N/A"));
        assert!(!accepts("Coded (handled by the claim writer)"));
    }

    #[test]
    fn rejects_comment_only() {
        assert!(!accepts("(derived downstream)"));
        assert!(!accepts("  (x)"));
    }

    #[test]
    fn accepts_functions_and_literals() {
        assert!(accepts("[bene_race]"));
        assert!(accepts("[bene_race] (race code)"));
        assert!(accepts("INSERT"));
        assert!(accepts("1,2,3 (equal split across options)"));
        assert!(accepts("[Blank]"));
        assert!(accepts("NULLS"));
    }
}
