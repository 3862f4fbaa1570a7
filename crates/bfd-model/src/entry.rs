//! One row of the field-value specification.

use serde::{Deserialize, Serialize};

use crate::record::RecordType;

/// A specification row: an output field name plus one expression cell per
/// record type.
///
/// Entries are built once by the loader and never mutated afterwards, so the
/// cells are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    line_number: usize,
    field: String,
    cells: [String; RecordType::ALL.len()],
}

impl ConfigEntry {
    /// Creates an entry with every expression cell empty.
    pub fn new(line_number: usize, field: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.into().trim().to_string(),
            cells: Default::default(),
        }
    }

    /// Sets the expression cell for `record_type`, trimming surrounding
    /// whitespace.
    #[must_use]
    pub fn with_expression(mut self, record_type: RecordType, expression: &str) -> Self {
        self.cells[record_type.index()] = expression.trim().to_string();
        self
    }

    /// Line in the specification resource this entry came from.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Output field name, as written in the specification.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Raw expression cell for `record_type` (empty when the column was
    /// absent or blank).
    pub fn expression(&self, record_type: RecordType) -> &str {
        &self.cells[record_type.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_per_record_type() {
        let entry = ConfigEntry::new(4, " BENE_ID ")
            .with_expression(RecordType::Beneficiary, "[bene_id]")
            .with_expression(RecordType::Carrier, "  1,2 ");
        assert_eq!(entry.field(), "BENE_ID");
        assert_eq!(entry.line_number(), 4);
        assert_eq!(entry.expression(RecordType::Beneficiary), "[bene_id]");
        assert_eq!(entry.expression(RecordType::Carrier), "1,2");
        assert_eq!(entry.expression(RecordType::Inpatient), "");
    }
}
