//! Plain-text rendering of specification validation results.

use bfd_map::{IssueKind, SpecReport};
use bfd_model::RecordType;

/// Issues that make the specification unusable as written. Comment-only
/// cells are informational.
pub fn blocking_issue_count(report: &SpecReport) -> usize {
    report
        .issues()
        .iter()
        .filter(|issue| !matches!(issue.kind, IssueKind::CommentOnly))
        .count()
}

/// Per-record-type counts followed by one line per issue.
pub fn report_text(report: &SpecReport) -> String {
    let mut lines: Vec<String> = RecordType::ALL
        .iter()
        .map(|record_type| {
            format!(
                "{record_type}: {} usable, {} issues",
                report.usable(*record_type),
                report.issues_for(*record_type).count()
            )
        })
        .collect();
    if report.is_clean() {
        lines.push("no issues".to_string());
    } else {
        lines.push(format!(
            "issues ({} blocking):",
            blocking_issue_count(report)
        ));
        lines.extend(report.issues().iter().map(|issue| format!("  {issue}")));
    }
    lines.join("\n")
}
