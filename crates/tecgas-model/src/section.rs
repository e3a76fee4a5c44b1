use crate::{Field, FieldId, ModelError, Result, SectionId, Table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    /// Labelled fields laid out side by side.
    Flat(Vec<Field>),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    kind: SectionKind,
}

impl Section {
    pub fn flat(id: SectionId, fields: Vec<Field>) -> Self {
        Self {
            id,
            kind: SectionKind::Flat(fields),
        }
    }

    pub fn table(id: SectionId, table: Table) -> Self {
        Self {
            id,
            kind: SectionKind::Table(table),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    pub fn kind(&self) -> &SectionKind {
        &self.kind
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.kind {
            SectionKind::Table(table) => Some(table),
            SectionKind::Flat(_) => None,
        }
    }

    pub fn as_flat(&self) -> Option<&[Field]> {
        match &self.kind {
            SectionKind::Flat(fields) => Some(fields),
            SectionKind::Table(_) => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self.kind, SectionKind::Table(_))
    }

    pub fn field(&self, row: Option<usize>, column: usize) -> Result<&Field> {
        match (&self.kind, row) {
            (SectionKind::Flat(fields), None) => {
                fields.get(column).ok_or(ModelError::ColumnOutOfRange {
                    section: self.id,
                    column,
                    columns: fields.len(),
                })
            }
            (SectionKind::Table(table), Some(row)) => {
                let found = table.row(row).ok_or(ModelError::RowOutOfRange {
                    section: self.id,
                    row,
                    rows: table.row_count(),
                })?;
                found.field(column).ok_or(ModelError::ColumnOutOfRange {
                    section: self.id,
                    column,
                    columns: table.column_count(),
                })
            }
            (SectionKind::Flat(_), Some(_)) => Err(ModelError::RowNotAllowed { section: self.id }),
            (SectionKind::Table(_), None) => Err(ModelError::RowRequired { section: self.id }),
        }
    }

    pub(crate) fn field_mut(&mut self, row: Option<usize>, column: usize) -> Result<&mut Field> {
        let section = self.id;
        match (&mut self.kind, row) {
            (SectionKind::Flat(fields), None) => {
                let columns = fields.len();
                fields.get_mut(column).ok_or(ModelError::ColumnOutOfRange {
                    section,
                    column,
                    columns,
                })
            }
            (SectionKind::Table(table), Some(row)) => {
                let rows = table.row_count();
                let columns = table.column_count();
                let found = table.row_mut(row).ok_or(ModelError::RowOutOfRange {
                    section,
                    row,
                    rows,
                })?;
                found.field_mut(column).ok_or(ModelError::ColumnOutOfRange {
                    section,
                    column,
                    columns,
                })
            }
            (SectionKind::Flat(_), Some(_)) => Err(ModelError::RowNotAllowed { section }),
            (SectionKind::Table(_), None) => Err(ModelError::RowRequired { section }),
        }
    }

    /// Every field of the section in row-major order.
    pub fn field_ids(&self) -> Vec<FieldId> {
        match &self.kind {
            SectionKind::Flat(fields) => (0..fields.len())
                .map(|index| FieldId::flat(self.id, index))
                .collect(),
            SectionKind::Table(table) => (0..table.row_count())
                .flat_map(|row| {
                    (0..table.column_count()).map(move |column| FieldId::cell(self.id, row, column))
                })
                .collect(),
        }
    }

    pub(crate) fn clear(&mut self) {
        match &mut self.kind {
            SectionKind::Flat(fields) => fields.iter_mut().for_each(Field::clear),
            SectionKind::Table(table) => {
                for row in table.rows_mut() {
                    row.fields_mut().for_each(Field::clear);
                }
            }
        }
    }
}
