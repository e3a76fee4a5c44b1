//! The planning sheet: one grid per section.
//!
//! Edits are collected while the sheet is drawn and applied afterwards so
//! the recalculation sees a consistent form.

use crate::state::AppState;
use crate::theme::{spacing, width};
use egui::{RichText, Ui};
use tecgas_model::{Field, FieldId, SectionId, SectionKind, Table};

pub struct FormView;

impl FormView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        let mut edits: Vec<(FieldId, String)> = Vec::new();

        for section in state.plan.form().sections() {
            ui.label(RichText::new(section.name()).strong().size(15.0));
            ui.add_space(spacing::XS);
            match section.kind() {
                SectionKind::Flat(fields) => show_flat(ui, section.id(), fields, &mut edits),
                SectionKind::Table(table) => show_table(ui, section.id(), table, &mut edits),
            }
            ui.add_space(spacing::MD);
        }

        for (id, text) in edits {
            if let Err(error) = state.plan.edit(id, &text) {
                tracing::warn!("Rejected edit: {}", error);
                state.set_error(error.to_string());
            }
        }
    }
}

fn show_flat(
    ui: &mut Ui,
    section: SectionId,
    fields: &[Field],
    edits: &mut Vec<(FieldId, String)>,
) {
    egui::Grid::new(section.name())
        .num_columns(2)
        .spacing([20.0, 4.0])
        .show(ui, |ui| {
            for (index, field) in fields.iter().enumerate() {
                ui.label(field.name());
                field_input(ui, field, width::VALUE, FieldId::flat(section, index), edits);
                ui.end_row();
            }
        });
}

fn show_table(
    ui: &mut Ui,
    section: SectionId,
    table: &Table,
    edits: &mut Vec<(FieldId, String)>,
) {
    egui::Grid::new(section.name())
        .num_columns(table.column_count())
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for header in table.headers() {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();
            for (row, cells) in table.rows().iter().enumerate() {
                for (column, field) in cells.fields().iter().enumerate() {
                    let id = FieldId::cell(section, row, column);
                    field_input(ui, field, width::CELL, id, edits);
                }
                ui.end_row();
            }
        });
}

fn field_input(
    ui: &mut Ui,
    field: &Field,
    desired_width: f32,
    id: FieldId,
    edits: &mut Vec<(FieldId, String)>,
) {
    let mut text = field.text().to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .desired_width(desired_width)
            .interactive(field.is_editable()),
    );
    if response.changed() {
        edits.push((id, text));
    }
}
