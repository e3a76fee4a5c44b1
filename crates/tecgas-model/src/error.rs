use thiserror::Error;

use crate::SectionId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("section {0} declared twice")]
    DuplicateSection(SectionId),
    #[error("{section} is a flat section and has no rows")]
    RowNotAllowed { section: SectionId },
    #[error("{section} is a table; a row index is required")]
    RowRequired { section: SectionId },
    #[error("row {row} is out of range for {section} ({rows} rows)")]
    RowOutOfRange {
        section: SectionId,
        row: usize,
        rows: usize,
    },
    #[error("column {column} is out of range for {section} ({columns} columns)")]
    ColumnOutOfRange {
        section: SectionId,
        column: usize,
        columns: usize,
    },
    #[error("{section} has no column named {column:?}")]
    UnknownColumn { section: SectionId, column: String },
    #[error("row has {found} cells but the table declares {expected} columns")]
    ColumnMismatch { expected: usize, found: usize },
    #[error("{field} is read-only")]
    ReadOnly { field: String },
    #[error("invalid field path: {0:?}")]
    InvalidFieldPath(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
