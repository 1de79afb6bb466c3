//! # Table Errors

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ColumnType;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Table loading and manipulation errors
#[derive(Debug, Clone, Error)]
pub enum TableError {
    // Input file errors
    #[error("Definition file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("Malformed CSV: {0}")]
    Csv(String),

    // Cell errors
    #[error("Row {row}, column '{column}': cannot read '{value}' as {expected}")]
    Parse {
        row: usize,
        column: String,
        value: String,
        expected: ColumnType,
    },

    #[error("Column '{column}' is declared {expected}, got a {actual} value")]
    CellType {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    // Shape errors
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Row has {actual} cells, table has {expected} columns")]
    RowWidth { expected: usize, actual: usize },
}

impl TableError {
    /// Whether the input file itself was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound(_))
    }
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        TableError::Csv(e.to_string())
    }
}
