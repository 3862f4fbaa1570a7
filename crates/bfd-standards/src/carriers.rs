//! Carrier lookup side table (carrier number and pricing locality by state).

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StandardsError;

/// Value returned when no row matches the requested state.
pub const UNKNOWN_CARRIER: &str = "0";

const STATE_COLUMN: &str = "STATE";
const STATE_CODE_COLUMN: &str = "STATE_CODE";

/// Rows of the carrier CSV keyed by column header.
#[derive(Debug, Clone, Default)]
pub struct CarrierTable {
    rows: Vec<BTreeMap<String, String>>,
}

impl CarrierTable {
    pub fn from_rows(rows: Vec<BTreeMap<String, String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` for the first row whose `STATE` or `STATE_CODE`
    /// equals `state` ignoring ASCII case, or [`UNKNOWN_CARRIER`].
    pub fn lookup(&self, state: &str, column: &str) -> &str {
        let state = state.trim();
        self.rows
            .iter()
            .find(|row| {
                [STATE_COLUMN, STATE_CODE_COLUMN]
                    .iter()
                    .any(|key| row.get(*key).is_some_and(|v| v.eq_ignore_ascii_case(state)))
            })
            .and_then(|row| row.get(column))
            .map_or(UNKNOWN_CARRIER, String::as_str)
    }
}

/// Reads the carrier CSV at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed, or lacks the `STATE` /
/// `STATE_CODE` columns.
pub fn load_carriers(path: &Path) -> Result<CarrierTable, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    parse_carriers(&bytes, path)
}

/// Parses carrier CSV content; `path` is only used in errors.
pub fn parse_carriers(bytes: &[u8], path: &Path) -> Result<CarrierTable, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    for required in [STATE_COLUMN, STATE_CODE_COLUMN] {
        if !headers.iter().any(|h| h == required) {
            return Err(StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, &e))?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.trim().to_string()))
            .collect();
        rows.push(row);
    }
    Ok(CarrierTable::from_rows(rows))
}
