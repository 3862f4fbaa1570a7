//! Data model for the claims field-mapping engine.
//!
//! - **record**: the closed set of export record types
//! - **fields**: typed output field identifiers per record type
//! - **entry**: one row of the field-value specification
//! - **context**: person, encounter and device views read by expressions
//! - **options**: mapping behaviour switches

#![deny(unsafe_code)]

pub mod context;
pub mod entry;
pub mod error;
pub mod fields;
pub mod options;
pub mod record;

use std::collections::BTreeMap;

pub use context::{Claim, Clinician, Device, Encounter, EvaluationContext, Person, Provider};
pub use entry::ConfigEntry;
pub use error::{ModelError, Result};
pub use fields::{
    BeneficiaryField, BeneficiaryHistoryField, CarrierField, DmeField, FieldId, InpatientField,
    OutpatientField, PrescriptionField,
};
pub use options::MappingOptions;
pub use record::RecordType;

/// Sparse output of one mapping call: field identifier to string value.
///
/// Fields without a configured or resolvable expression are absent.
pub type FieldValueMap = BTreeMap<FieldId, String>;

/// Values of `record_type` in column order, with `""` for absent fields.
pub fn ordered_values(record_type: RecordType, values: &FieldValueMap) -> Vec<&str> {
    FieldId::all(record_type)
        .into_iter()
        .map(|field| values.get(&field).map(String::as_str).unwrap_or(""))
        .collect()
}
