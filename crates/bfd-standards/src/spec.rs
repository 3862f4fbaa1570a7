//! Field-value specification (TSV) loading.
//!
//! The specification has a header row naming a `Field` column, an optional
//! `Line` column and one expression column per record type. Every following
//! row becomes one [`ConfigEntry`], in file order.

use std::path::Path;

use bfd_model::record::header_key;
use bfd_model::{ConfigEntry, RecordType};
use tracing::{debug, warn};

use crate::error::StandardsError;

const FIELD_COLUMN: &str = "field";
const LINE_COLUMNS: &[&str] = &["line", "linenum", "linenumber"];

/// Reads and parses the specification at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read, the TSV is malformed, or the header has
/// no `Field` column.
pub fn load_spec(path: &Path) -> Result<Vec<ConfigEntry>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    parse_spec(&bytes, path)
}

/// Parses specification content; `path` is only used in errors and logs.
pub fn parse_spec(bytes: &[u8], path: &Path) -> Result<Vec<ConfigEntry>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .clone();
    let keys: Vec<String> = headers.iter().map(header_key).collect();

    let field_idx = keys
        .iter()
        .position(|k| k == FIELD_COLUMN)
        .ok_or_else(|| StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: "Field".to_string(),
        })?;
    let line_idx = keys.iter().position(|k| LINE_COLUMNS.contains(&k.as_str()));

    let mut columns: Vec<(RecordType, usize)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if let Some(record_type) = RecordType::from_header(header) {
            columns.push((record_type, idx));
        }
    }
    for record_type in RecordType::ALL {
        if !columns.iter().any(|(rt, _)| *rt == record_type) {
            debug!(
                path = %path.display(),
                %record_type,
                "specification has no column for record type"
            );
        }
    }

    let mut entries = Vec::new();
    let mut lines = LineCounter::new(bytes);
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, &e))?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let physical_line = record
            .position()
            .map_or(0, |p| lines.line_at(p.byte() as usize));
        let line_number = line_idx
            .and_then(|idx| record.get(idx))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(physical_line);

        let field = record.get(field_idx).unwrap_or("").trim();
        if field.is_empty() {
            warn!(
                path = %path.display(),
                line = line_number,
                "skipping specification row without a field name"
            );
            continue;
        }

        let entry = columns.iter().fold(
            ConfigEntry::new(line_number, field),
            |entry, (record_type, idx)| {
                entry.with_expression(*record_type, record.get(*idx).unwrap_or(""))
            },
        );
        entries.push(entry);
    }

    debug!(
        path = %path.display(),
        entries = entries.len(),
        "parsed field-value specification"
    );
    Ok(entries)
}

/// Maps record offsets to 1-based physical lines. The csv reader reports a
/// record's position before the blank lines it skipped, so those are counted
/// here against the raw input.
struct LineCounter<'a> {
    bytes: &'a [u8],
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            offset: 0,
            line: 1,
        }
    }

    /// Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        let end = offset.min(self.bytes.len());
        if end > self.offset {
            self.line += self.bytes[self.offset..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.offset = end;
        }
        while let Some(&b) = self.bytes.get(self.offset) {
            match b {
                b'\n' => self.line += 1,
                b'\r' => {}
                _ => break,
            }
            self.offset += 1;
        }
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Line\tField\tBeneficiary\tBeneficiary_History\tCarrier\n\
                          2\tDML_IND\tINSERT\tINSERT\tINSERT\n\
                          \n\
                          3\tBENE_RACE_CD\t[bene_race]\t[bene_race]\t\n";

    #[test]
    fn parses_rows_and_skips_blank_lines() {
        let entries = parse_spec(SAMPLE.as_bytes(), Path::new("sample.tsv")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].field(), "DML_IND");
        assert_eq!(entries[1].line_number(), 3);
        assert_eq!(entries[1].expression(RecordType::Beneficiary), "[bene_race]");
        assert_eq!(entries[1].expression(RecordType::Carrier), "");
        assert_eq!(entries[1].expression(RecordType::Dme), "");
    }

    #[test]
    fn physical_line_used_without_line_column() {
        let content = "Field\tCarrier\nLINE_NUM\t1\n\n  CARR_NUM\t  [carr_num]\n";
        let entries = parse_spec(content.as_bytes(), Path::new("sample.tsv")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number(), 2);
        assert_eq!(entries[1].line_number(), 4);
        assert_eq!(entries[1].field(), "CARR_NUM");
        assert_eq!(entries[1].expression(RecordType::Carrier), "[carr_num]");
    }

    #[test]
    fn physical_line_counts_every_blank_line() {
        let content = "Field\tCarrier\n\n\n\nDML_IND\tINSERT\n\r\n\nCARR_NUM\t[carr_num]\nLINE_NUM\t1\n";
        let entries = parse_spec(content.as_bytes(), Path::new("gaps.tsv")).unwrap();
        let lines: Vec<_> = entries
            .iter()
            .map(|e| (e.field(), e.line_number()))
            .collect();
        assert_eq!(
            lines,
            vec![("DML_IND", 5), ("CARR_NUM", 8), ("LINE_NUM", 9)]
        );
    }

    #[test]
    fn missing_field_column_is_an_error() {
        let content = "Name\tCarrier\nCARR_NUM\t1\n";
        let err = parse_spec(content.as_bytes(), Path::new("bad.tsv")).unwrap_err();
        assert!(matches!(err, StandardsError::MissingColumn { .. }));
    }

    #[test]
    fn quotes_are_literal() {
        let content = "Field\tCarrier\nHCPCS_CD\t\"A\",B\n";
        let entries = parse_spec(content.as_bytes(), Path::new("q.tsv")).unwrap();
        assert_eq!(entries[0].expression(RecordType::Carrier), "\"A\",B");
    }
}
