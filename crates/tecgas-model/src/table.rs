#![deny(unsafe_code)]

use crate::{Field, ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, column: usize) -> Option<&Field> {
        self.fields.get(column)
    }

    pub(crate) fn field_mut(&mut self, column: usize) -> Option<&mut Field> {
        self.fields.get_mut(column)
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::text)
    }
}

/// Rows of fields aligned to a shared header list.
///
/// Every row holds exactly one field per header. A table may mark one row as
/// its summary row, which is computed rather than typed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    summary_row: Option<usize>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            summary_row: None,
        }
    }

    /// Append a row of prepared fields.
    pub fn push_row(&mut self, fields: Vec<Field>) -> Result<()> {
        if fields.len() != self.headers.len() {
            return Err(ModelError::ColumnMismatch {
                expected: self.headers.len(),
                found: fields.len(),
            });
        }
        self.rows.push(Row { fields });
        Ok(())
    }

    /// Append a row, building one field per column from its index and header.
    pub fn add_row(&mut self, mut build: impl FnMut(usize, &str) -> Field) {
        let fields = self
            .headers
            .iter()
            .enumerate()
            .map(|(column, header)| build(column, header))
            .collect();
        self.rows.push(Row { fields });
    }

    /// Mark the most recently added row as the summary row.
    #[must_use]
    pub fn with_last_row_as_summary(mut self) -> Self {
        self.summary_row = self.rows.len().checked_sub(1);
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.rows.iter_mut()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Find a column by header, ignoring ASCII case.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        let header = header.trim();
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header))
    }

    pub fn summary_row(&self) -> Option<usize> {
        self.summary_row
    }

    pub fn is_summary_row(&self, index: usize) -> bool {
        self.summary_row == Some(index)
    }

    /// Rows that contribute to the summary, with their indices.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(index, _)| !self.is_summary_row(*index))
    }
}
