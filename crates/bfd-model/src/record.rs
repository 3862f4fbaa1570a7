//! Supported output record kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Closed set of export record types.
///
/// Each record type owns one expression column in the field-value
/// specification and one identifier set (see [`crate::FieldId`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    Beneficiary,
    BeneficiaryHistory,
    Carrier,
    Dme,
    Inpatient,
    Outpatient,
    Prescription,
}

impl RecordType {
    /// All record types in specification column order.
    pub const ALL: [RecordType; 7] = [
        RecordType::Beneficiary,
        RecordType::BeneficiaryHistory,
        RecordType::Carrier,
        RecordType::Dme,
        RecordType::Inpatient,
        RecordType::Outpatient,
        RecordType::Prescription,
    ];

    /// Stable lowercase name used in logs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Beneficiary => "beneficiary",
            RecordType::BeneficiaryHistory => "beneficiary_history",
            RecordType::Carrier => "carrier",
            RecordType::Dme => "dme",
            RecordType::Inpatient => "inpatient",
            RecordType::Outpatient => "outpatient",
            RecordType::Prescription => "prescription",
        }
    }

    /// Position of this record type in [`RecordType::ALL`].
    pub fn index(&self) -> usize {
        match self {
            RecordType::Beneficiary => 0,
            RecordType::BeneficiaryHistory => 1,
            RecordType::Carrier => 2,
            RecordType::Dme => 3,
            RecordType::Inpatient => 4,
            RecordType::Outpatient => 5,
            RecordType::Prescription => 6,
        }
    }

    /// Matches a specification column header to a record type.
    ///
    /// Headers are compared after lowercasing and dropping everything that is
    /// not alphanumeric, and a trailing `fields` suffix is ignored. This
    /// accepts `beneficiary_history`, `beneficiaryHistory` and
    /// `BeneficiaryHistoryFields` alike.
    pub fn from_header(header: &str) -> Option<Self> {
        let key = header_key(header);
        let key = key.strip_suffix("fields").unwrap_or(&key);
        match key {
            "beneficiary" | "bene" => Some(RecordType::Beneficiary),
            "beneficiaryhistory" | "benehistory" => Some(RecordType::BeneficiaryHistory),
            "carrier" => Some(RecordType::Carrier),
            "dme" => Some(RecordType::Dme),
            "inpatient" => Some(RecordType::Inpatient),
            "outpatient" => Some(RecordType::Outpatient),
            "prescription" | "pde" => Some(RecordType::Prescription),
            _ => None,
        }
    }
}

/// Normalizes a header for comparison: lowercase, alphanumerics only.
pub fn header_key(header: &str) -> String {
    header
        .trim_matches('\u{feff}')
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::from_header(s).ok_or_else(|| ModelError::InvalidRecordType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_variants_resolve() {
        for header in [
            "beneficiary_history",
            "beneficiaryHistory",
            "BeneficiaryHistoryFields",
            " BENEFICIARY-HISTORY ",
        ] {
            assert_eq!(
                RecordType::from_header(header),
                Some(RecordType::BeneficiaryHistory),
                "{header}"
            );
        }
        assert_eq!(RecordType::from_header("DMEFields"), Some(RecordType::Dme));
        assert_eq!(RecordType::from_header("Field"), None);
    }

    #[test]
    fn index_matches_all_order() {
        for (idx, record_type) in RecordType::ALL.iter().enumerate() {
            assert_eq!(record_type.index(), idx);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("carrier".parse::<RecordType>().unwrap(), RecordType::Carrier);
        assert!("hospice".parse::<RecordType>().is_err());
    }
}
