//! Terminal tables for plans and edit results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tecgas_core::EditReport;
use tecgas_model::{Field, FormModel, Section, SectionKind};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Every section as a titled table.
pub fn render_plan(form: &FormModel) -> String {
    form.sections()
        .iter()
        .map(|section| format!("{}\n{}", section.name(), section_table(section)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn print_plan(form: &FormModel) {
    println!("{}", render_plan(form));
}

pub fn section_table(section: &Section) -> Table {
    let mut table = Table::new();
    match section.kind() {
        SectionKind::Flat(fields) => {
            table.set_header(vec![header_cell("Field"), header_cell("Value")]);
            for field in fields {
                table.add_row(vec![Cell::new(field.name()), value_cell(field)]);
            }
        }
        SectionKind::Table(grid) => {
            let mut header = vec![header_cell("#")];
            header.extend(grid.headers().iter().map(|name| header_cell(name)));
            table.set_header(header);
            for (index, row) in grid.rows().iter().enumerate() {
                let mut cells = vec![if grid.is_summary_row(index) {
                    dim_cell("Σ")
                } else {
                    dim_cell(index + 1)
                }];
                cells.extend(row.fields().iter().map(value_cell));
                table.add_row(cells);
            }
            for column in 1..=grid.column_count() {
                align_column(&mut table, column, CellAlignment::Right);
            }
        }
    }
    apply_table_style(&mut table);
    table
}

/// Table of the fields an edit changed, with their new values.
pub fn changes_table(form: &FormModel, reports: &[EditReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    for id in reports.iter().flat_map(|report| &report.changed) {
        let value = form.text(*id).unwrap_or_default();
        table.add_row(vec![Cell::new(form.describe(*id)), Cell::new(value)]);
    }
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn sections_table(form: &FormModel) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Section"),
        header_cell("Layout"),
    ]);
    for (index, section) in form.sections().iter().enumerate() {
        let layout = match section.kind() {
            SectionKind::Flat(fields) => format!("{} fields", fields.len()),
            SectionKind::Table(grid) => {
                format!("{} rows x {} columns", grid.row_count(), grid.column_count())
            }
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(section.name()),
            dim_cell(layout),
        ]);
    }
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

fn value_cell(field: &Field) -> Cell {
    if field.is_editable() {
        Cell::new(field.text())
    } else {
        Cell::new(field.text()).add_attribute(Attribute::Bold)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
