use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bfd_map::{FunctionRegistry, IssueKind, MappingTally, SpecReport};
use bfd_model::{FieldId, FieldValueMap, RecordType};

pub fn print_validation(path: &Path, entries: usize, report: &SpecReport) {
    println!("Specification: {}", path.display());
    println!("Entries: {entries}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record type"),
        header_cell("Usable"),
        header_cell("Comments"),
        header_cell("Unknown fields"),
        header_cell("Unknown functions"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record_type in RecordType::ALL {
        let count = |wanted: fn(&IssueKind) -> bool| {
            report
                .issues_for(record_type)
                .filter(|issue| wanted(&issue.kind))
                .count()
        };
        table.add_row(vec![
            Cell::new(record_type).add_attribute(Attribute::Bold),
            Cell::new(report.usable(record_type)),
            count_cell(count(|k| matches!(k, IssueKind::CommentOnly)), Color::DarkGrey),
            count_cell(count(|k| matches!(k, IssueKind::UnknownField)), Color::Red),
            count_cell(
                count(|k| matches!(k, IssueKind::UnknownFunction { .. })),
                Color::Yellow,
            ),
        ]);
    }
    println!("{table}");

    if report.is_clean() {
        return;
    }
    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Line"),
        header_cell("Record type"),
        header_cell("Field"),
        header_cell("Issue"),
    ]);
    apply_table_style(&mut issues);
    align_column(&mut issues, 0, CellAlignment::Right);
    for issue in report.issues() {
        let (text, color) = match &issue.kind {
            IssueKind::CommentOnly => ("comment-only cell".to_string(), Color::DarkGrey),
            IssueKind::UnknownField => ("unknown field name".to_string(), Color::Red),
            IssueKind::UnknownFunction { expression } => {
                (format!("unknown function {expression}"), Color::Yellow)
            }
        };
        issues.add_row(vec![
            Cell::new(issue.line),
            Cell::new(issue.record_type),
            Cell::new(&issue.field),
            Cell::new(text).fg(color),
        ]);
    }
    println!("{issues}");
}

pub fn print_functions(registry: &FunctionRegistry) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Function"), header_cell("Description")]);
    apply_table_style(&mut table);
    for function in registry.functions() {
        table.add_row(vec![
            Cell::new(format!("[{}]", function.name())),
            Cell::new(function.description()),
        ]);
    }
    println!("{table}");
}

pub fn print_mapping(
    record_type: RecordType,
    values: &FieldValueMap,
    tally: &MappingTally,
    all: bool,
) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for field in FieldId::all(record_type) {
        match values.get(&field) {
            Some(value) if value.starts_with(bfd_map::UNKNOWN_FUNCTION_SENTINEL) => {
                table.add_row(vec![Cell::new(field.as_str()), Cell::new(value).fg(Color::Yellow)]);
            }
            Some(value) => {
                table.add_row(vec![Cell::new(field.as_str()), Cell::new(value)]);
            }
            None if all => {
                table.add_row(vec![Cell::new(field.as_str()).fg(Color::DarkGrey), Cell::new("")]);
            }
            None => {}
        }
    }
    println!("{table}");
    println!(
        "{record_type}: {} of {} expressions processed",
        tally.processed, tally.total
    );
    if let Some(error) = &tally.error {
        eprintln!("error: mapping stopped early: {error}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
