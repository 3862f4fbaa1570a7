//! Loaded specification with per-record-type working lists.
//!
//! The working list of a record type holds, in file order, the rows whose
//! cell passes [`should_add`]. Field names are resolved once here; rows that
//! do not resolve stay in the list (their expression still counts towards
//! the tally) but are never written to the output map.

use std::fmt;
use std::path::Path;

use bfd_model::{ConfigEntry, FieldId, RecordType};
use bfd_standards::{StandardsError, load_spec};
use serde::Serialize;
use tracing::{info, warn};

use crate::evaluator::ExpressionEvaluator;
use crate::filter::{is_comment_only, should_add};
use crate::functions::FunctionRegistry;
use crate::resolver::{expression_by_type, field_by_type};

/// What is wrong with one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The cell holds only a comment and is ignored.
    CommentOnly,
    /// The field name is not a column of the record type.
    UnknownField,
    /// The cell references an unregistered function or contains code.
    UnknownFunction { expression: String },
}

/// One finding of specification validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecIssue {
    pub line: usize,
    pub field: String,
    pub record_type: RecordType,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for SpecIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} {} {}: ", self.line, self.record_type, self.field)?;
        match &self.kind {
            IssueKind::CommentOnly => f.write_str("comment-only cell ignored"),
            IssueKind::UnknownField => {
                write!(f, "not a {} column", self.record_type)
            }
            IssueKind::UnknownFunction { expression } => {
                write!(f, "unknown function in {expression:?}")
            }
        }
    }
}

/// Validation result for a whole specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecReport {
    issues: Vec<SpecIssue>,
    usable: [usize; RecordType::ALL.len()],
}

impl SpecReport {
    pub fn issues(&self) -> &[SpecIssue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of rows in the working list of `record_type`.
    pub fn usable(&self, record_type: RecordType) -> usize {
        self.usable[record_type.index()]
    }

    /// Issues found for `record_type`.
    pub fn issues_for(&self, record_type: RecordType) -> impl Iterator<Item = &SpecIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.record_type == record_type)
    }

    fn push(&mut self, entry: &ConfigEntry, record_type: RecordType, kind: IssueKind) {
        self.issues.push(SpecIssue {
            line: entry.line_number(),
            field: entry.field().to_string(),
            record_type,
            kind,
        });
    }
}

#[derive(Debug, Clone, Copy)]
struct WorkingEntry {
    index: usize,
    field: Option<FieldId>,
}

/// Immutable specification, ready for mapping.
#[derive(Debug)]
pub struct ExportSpec {
    entries: Vec<ConfigEntry>,
    working: [Vec<WorkingEntry>; RecordType::ALL.len()],
    registry: FunctionRegistry,
    report: SpecReport,
}

impl ExportSpec {
    /// Builds the working lists and validates every usable cell against
    /// `registry`.
    pub fn new(entries: Vec<ConfigEntry>, registry: FunctionRegistry) -> Self {
        let mut working: [Vec<WorkingEntry>; RecordType::ALL.len()] =
            std::array::from_fn(|_| Vec::new());
        let mut report = SpecReport::default();
        let evaluator = ExpressionEvaluator::new(&registry);

        for record_type in RecordType::ALL {
            let list = &mut working[record_type.index()];
            for (index, entry) in entries.iter().enumerate() {
                let expression = expression_by_type(entry, record_type);
                if !should_add(expression, entry, record_type) {
                    if is_comment_only(expression) {
                        report.push(entry, record_type, IssueKind::CommentOnly);
                    }
                    continue;
                }

                let field = match field_by_type(entry, record_type) {
                    Ok(field) => Some(field),
                    Err(err) => {
                        warn!(
                            line = entry.line_number(),
                            %record_type,
                            field = entry.field(),
                            "{err}"
                        );
                        report.push(entry, record_type, IssueKind::UnknownField);
                        None
                    }
                };
                if evaluator.is_unknown(expression) {
                    warn!(
                        line = entry.line_number(),
                        %record_type,
                        field = entry.field(),
                        expression,
                        "cell references an unknown function"
                    );
                    report.push(
                        entry,
                        record_type,
                        IssueKind::UnknownFunction {
                            expression: expression.to_string(),
                        },
                    );
                }
                list.push(WorkingEntry { index, field });
            }
            report.usable[record_type.index()] = list.len();
            info!(
                %record_type,
                usable = list.len(),
                issues = report.issues_for(record_type).count(),
                "built working list"
            );
        }

        Self {
            entries,
            working,
            registry,
            report,
        }
    }

    /// Loads the specification at `path` with the built-in function set.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        Ok(Self::new(load_spec(path)?, FunctionRegistry::standard()))
    }

    /// Every row, in file order.
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }

    /// Working list of `record_type` with the resolved field of each row.
    pub fn working(
        &self,
        record_type: RecordType,
    ) -> impl ExactSizeIterator<Item = (&ConfigEntry, Option<FieldId>)> {
        self.working[record_type.index()]
            .iter()
            .map(|w| (&self.entries[w.index], w.field))
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn report(&self) -> &SpecReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use bfd_model::BeneficiaryField;

    use super::*;

    fn spec() -> ExportSpec {
        let entries = vec![
            ConfigEntry::new(2, "DML_IND")
                .with_expression(RecordType::Beneficiary, "INSERT")
                .with_expression(RecordType::Carrier, "NULL"),
            ConfigEntry::new(3, "BENE_RACE_CD")
                .with_expression(RecordType::Beneficiary, "[bene_race]")
                .with_expression(RecordType::Carrier, "(not on carrier claims)"),
            ConfigEntry::new(4, "NOT_A_COLUMN").with_expression(RecordType::Beneficiary, "X"),
            ConfigEntry::new(5, "BENE_ZIP_CD")
                .with_expression(RecordType::Beneficiary, "[zip_code]"),
        ];
        ExportSpec::new(entries, FunctionRegistry::standard())
    }

    #[test]
    fn working_lists_follow_the_filter() {
        let spec = spec();
        let fields: Vec<_> = spec
            .working(RecordType::Beneficiary)
            .map(|(entry, field)| (entry.field(), field))
            .collect();
        assert_eq!(
            fields,
            vec![
                (
                    "DML_IND",
                    Some(FieldId::Beneficiary(BeneficiaryField::DML_IND))
                ),
                (
                    "BENE_RACE_CD",
                    Some(FieldId::Beneficiary(BeneficiaryField::BENE_RACE_CD))
                ),
                ("NOT_A_COLUMN", None),
                (
                    "BENE_ZIP_CD",
                    Some(FieldId::Beneficiary(BeneficiaryField::BENE_ZIP_CD))
                ),
            ]
        );
        assert_eq!(spec.working(RecordType::Carrier).len(), 0);
        assert_eq!(spec.report().usable(RecordType::Beneficiary), 4);
    }

    #[test]
    fn report_lists_every_issue() {
        let spec = spec();
        let issues: Vec<String> = spec.report().issues().iter().map(ToString::to_string).collect();
        assert_eq!(
            issues,
            vec![
                "line 4 beneficiary NOT_A_COLUMN: not a beneficiary column",
                "line 5 beneficiary BENE_ZIP_CD: unknown function in \"[zip_code]\"",
                "line 3 carrier BENE_RACE_CD: comment-only cell ignored",
            ]
        );
        assert!(!spec.report().is_clean());
        assert_eq!(spec.report().issues_for(RecordType::Dme).count(), 0);
    }
}
