use std::collections::HashSet;

use tracing::info;

use crate::{Field, FieldId, FieldPath, ModelError, Result, Section, SectionId, SectionKind};

/// The whole planning sheet: sections in their declared order.
///
/// Writes through [`FormModel::set`] never trigger recalculation; the engine
/// owns that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    sections: Vec<Section>,
}

impl FormModel {
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id()) {
                return Err(ModelError::DuplicateSection(section.id()));
            }
        }
        Ok(Self { sections })
    }

    pub(crate) fn from_sections_unchecked(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Section names in declared order.
    pub fn list_sections(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Result<&Section> {
        self.sections
            .iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| ModelError::UnknownSection(id.name().to_string()))
    }

    fn section_mut(&mut self, id: SectionId) -> Result<&mut Section> {
        self.sections
            .iter_mut()
            .find(|section| section.id() == id)
            .ok_or_else(|| ModelError::UnknownSection(id.name().to_string()))
    }

    pub fn field(&self, id: FieldId) -> Result<&Field> {
        self.section(id.section)?.field(id.row, id.column)
    }

    /// Current text of a field.
    pub fn get_field(&self, section: SectionId, row: Option<usize>, column: usize) -> Result<&str> {
        self.field(FieldId {
            section,
            row,
            column,
        })
        .map(Field::text)
    }

    /// Shorthand for [`FormModel::get_field`] by id.
    pub fn text(&self, id: FieldId) -> Result<&str> {
        self.field(id).map(Field::text)
    }

    /// User-facing write. Rejects read-only fields.
    pub fn set_field(
        &mut self,
        section: SectionId,
        row: Option<usize>,
        column: usize,
        text: &str,
    ) -> Result<bool> {
        self.set(
            FieldId {
                section,
                row,
                column,
            },
            text,
        )
    }

    /// Same as [`FormModel::set_field`], addressed by id. Returns whether the text changed.
    pub fn set(&mut self, id: FieldId, text: &str) -> Result<bool> {
        let described = self.describe(id);
        let field = self.section_mut(id.section)?.field_mut(id.row, id.column)?;
        if !field.is_editable() {
            return Err(ModelError::ReadOnly { field: described });
        }
        Ok(field.set_text(text))
    }

    /// Write without the editability check. Used for derived values and loaded documents.
    pub fn assign(&mut self, id: FieldId, text: &str) -> Result<bool> {
        let field = self.section_mut(id.section)?.field_mut(id.row, id.column)?;
        Ok(field.set_text(text))
    }

    /// Reset every field according to its clear policy.
    pub fn clear_all(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
        info!("Cleared all sections");
    }

    /// Every field id on the sheet, section by section in row-major order.
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.sections.iter().flat_map(Section::field_ids).collect()
    }

    /// Turn a typed path into a field id. Labels and headers match ignoring ASCII case.
    pub fn resolve(&self, path: &FieldPath) -> Result<FieldId> {
        let section = self.section(path.section)?;
        let unknown = || ModelError::UnknownColumn {
            section: path.section,
            column: path.column.clone(),
        };
        match (section.kind(), path.row) {
            (SectionKind::Flat(fields), None) => {
                let wanted = path.column.trim();
                let index = fields
                    .iter()
                    .position(|field| field.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(unknown)?;
                Ok(FieldId::flat(path.section, index))
            }
            (SectionKind::Table(table), Some(row)) => {
                let column = table.column_index(&path.column).ok_or_else(unknown)?;
                let out_of_range = || ModelError::RowOutOfRange {
                    section: path.section,
                    row,
                    rows: table.row_count(),
                };
                let index = row.checked_sub(1).ok_or_else(out_of_range)?;
                if index >= table.row_count() {
                    return Err(out_of_range());
                }
                Ok(FieldId::cell(path.section, index, column))
            }
            (SectionKind::Flat(_), Some(_)) => Err(ModelError::RowNotAllowed {
                section: path.section,
            }),
            (SectionKind::Table(_), None) => Err(ModelError::RowRequired {
                section: path.section,
            }),
        }
    }

    /// Render a field id as a [`FieldPath`] string, falling back to the raw id.
    pub fn describe(&self, id: FieldId) -> String {
        let Ok(section) = self.section(id.section) else {
            return id.to_string();
        };
        let column = match section.kind() {
            SectionKind::Flat(fields) => fields.get(id.column).map(|field| field.name().to_string()),
            SectionKind::Table(table) => table.headers().get(id.column).cloned(),
        };
        match column {
            Some(column) => FieldPath {
                section: id.section,
                row: id.row.map(|row| row + 1),
                column,
            }
            .to_string(),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Table;

    fn small_form() -> FormModel {
        let mut table = Table::new(["Depth", "Gas Volume"]);
        table.add_row(|_, header| Field::new(header));
        table.add_row(|column, header| {
            let field = Field::new(header);
            if column == 1 { field.read_only() } else { field }
        });
        FormModel::new(vec![
            Section::flat(SectionId::GeneralInfo, vec![Field::new("Max Depth")]),
            Section::table(SectionId::EmergencyReserve, table.with_last_row_as_summary()),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_sections() {
        let err = FormModel::new(vec![
            Section::flat(SectionId::GeneralInfo, vec![]),
            Section::flat(SectionId::GeneralInfo, vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateSection(SectionId::GeneralInfo));
    }

    #[test]
    fn set_field_enforces_editability() {
        let mut form = small_form();
        assert!(
            form.set_field(SectionId::GeneralInfo, None, 0, "120")
                .unwrap()
        );
        assert_eq!(form.get_field(SectionId::GeneralInfo, None, 0).unwrap(), "120");

        let summary = FieldId::cell(SectionId::EmergencyReserve, 1, 1);
        let err = form.set(summary, "9").unwrap_err();
        assert!(matches!(err, ModelError::ReadOnly { .. }));
        assert!(form.assign(summary, "9").unwrap());
        assert_eq!(form.text(summary).unwrap(), "9");
    }

    #[test]
    fn addressing_errors_are_typed() {
        let form = small_form();
        assert!(matches!(
            form.get_field(SectionId::GeneralInfo, Some(0), 0),
            Err(ModelError::RowNotAllowed { .. })
        ));
        assert!(matches!(
            form.get_field(SectionId::EmergencyReserve, None, 0),
            Err(ModelError::RowRequired { .. })
        ));
        assert!(matches!(
            form.get_field(SectionId::EmergencyReserve, Some(5), 0),
            Err(ModelError::RowOutOfRange { .. })
        ));
        assert!(matches!(
            form.get_field(SectionId::DecoStops, Some(0), 0),
            Err(ModelError::UnknownSection(_))
        ));
    }

    #[test]
    fn resolve_and_describe_agree() {
        let form = small_form();
        let path: FieldPath = "Gas Reserve (Emergency)/2/gas volume".parse().unwrap();
        let id = form.resolve(&path).unwrap();
        assert_eq!(id, FieldId::cell(SectionId::EmergencyReserve, 1, 1));
        assert_eq!(form.describe(id), "Gas Reserve (Emergency)/2/Gas Volume");

        let path: FieldPath = "General Info/max depth".parse().unwrap();
        assert_eq!(form.resolve(&path).unwrap(), FieldId::flat(SectionId::GeneralInfo, 0));

        let path: FieldPath = "Gas Reserve (Emergency)/3/Depth".parse().unwrap();
        assert!(matches!(
            form.resolve(&path),
            Err(ModelError::RowOutOfRange { row: 3, .. })
        ));
    }

    #[test]
    fn resolve_rejects_row_zero() {
        let form = small_form();
        let path = FieldPath {
            section: SectionId::EmergencyReserve,
            row: Some(0),
            column: "Depth".to_string(),
        };
        assert!(matches!(
            form.resolve(&path),
            Err(ModelError::RowOutOfRange { row: 0, .. })
        ));
    }
}
