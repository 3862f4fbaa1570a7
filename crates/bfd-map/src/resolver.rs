//! Field and expression lookup for one specification row.

use bfd_model::{ConfigEntry, FieldId, RecordType};

use crate::error::MappingError;

/// The cell of `entry` that applies to `record_type`.
///
/// [`RecordType`] is closed, so every value has a cell.
pub fn expression_by_type(entry: &ConfigEntry, record_type: RecordType) -> &str {
    entry.expression(record_type)
}

/// Typed output field for the entry's field name under `record_type`.
///
/// # Errors
///
/// [`MappingError::UnknownField`] when the name is not a column of
/// `record_type`.
pub fn field_by_type(entry: &ConfigEntry, record_type: RecordType) -> Result<FieldId, MappingError> {
    FieldId::resolve(record_type, entry.field()).ok_or_else(|| MappingError::UnknownField {
        line: entry.line_number(),
        field: entry.field().to_string(),
        record_type,
    })
}

#[cfg(test)]
mod tests {
    use bfd_model::{CarrierField, PrescriptionField};

    use super::*;

    #[test]
    fn resolves_per_record_type() {
        let entry = ConfigEntry::new(3, "DML_IND").with_expression(RecordType::Carrier, "INSERT");
        assert_eq!(expression_by_type(&entry, RecordType::Carrier), "INSERT");
        assert_eq!(expression_by_type(&entry, RecordType::Prescription), "");
        assert_eq!(
            field_by_type(&entry, RecordType::Carrier).unwrap(),
            FieldId::Carrier(CarrierField::DML_IND)
        );
        assert_eq!(
            field_by_type(&entry, RecordType::Prescription).unwrap(),
            FieldId::Prescription(PrescriptionField::DML_IND)
        );
    }

    #[test]
    fn unknown_field_names_the_row() {
        let entry = ConfigEntry::new(12, "NOT_A_COLUMN");
        let err = field_by_type(&entry, RecordType::Dme).unwrap_err();
        assert_eq!(
            err,
            MappingError::UnknownField {
                line: 12,
                field: "NOT_A_COLUMN".to_string(),
                record_type: RecordType::Dme,
            }
        );
        assert_eq!(err.to_string(), "line 12: field NOT_A_COLUMN is not a dme column");
    }
}
