//! CSV table loader
//!
//! Reads a CSV file into a `Table` typed by a schema:
//! - Only the schema's columns are kept, in schema order
//! - Schema columns absent from the header are left out, so validation
//!   reports them
//! - Blank cells become `Null`
//! - Cells that cannot be read as the declared type are errors, never coerced

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::schema::{ColumnSchema, ColumnType};

use super::errors::{TableError, TableResult};
use super::{Cell, Column, Table};

/// Loads CSV tables against a schema.
pub struct TableLoader<'a> {
    schema: &'a ColumnSchema,
}

impl<'a> TableLoader<'a> {
    /// Creates a loader for the given schema.
    pub fn new(schema: &'a ColumnSchema) -> Self {
        Self { schema }
    }

    /// Loads a CSV file.
    ///
    /// # Errors
    ///
    /// - `TableError::NotFound` if the file does not exist
    /// - `TableError::Io` if it cannot be opened for another reason
    /// - `TableError::Csv` / `TableError::Parse` for malformed content
    pub fn load(&self, path: &Path) -> TableResult<Table> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                TableError::NotFound(path.to_path_buf())
            } else {
                TableError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;

        self.from_reader(file)
    }

    /// Loads CSV content from any reader.
    pub fn from_reader<R: Read>(&self, reader: R) -> TableResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        // (source index, column name, declared type)
        let projection: Vec<(usize, &str, ColumnType)> = self
            .schema
            .columns()
            .iter()
            .filter_map(|(name, ty)| {
                headers
                    .iter()
                    .position(|h| h == name)
                    .map(|idx| (idx, name.as_str(), *ty))
            })
            .collect();

        let mut table = Table::new(
            projection
                .iter()
                .map(|(_, name, ty)| Column::new(*name, *ty))
                .collect(),
        );

        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            let cells = projection
                .iter()
                .map(|(idx, name, ty)| parse_cell(record.get(*idx).unwrap_or(""), *ty, row, name))
                .collect::<TableResult<Vec<_>>>()?;
            table.push_row(cells)?;
        }

        Ok(table)
    }
}

/// Reads one raw CSV field as the declared type.
fn parse_cell(raw: &str, ty: ColumnType, row: usize, column: &str) -> TableResult<Cell> {
    if raw.is_empty() {
        return Ok(Cell::Null);
    }

    match ty {
        ColumnType::String => Ok(Cell::Str(raw.to_string())),
        ColumnType::Int8 => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(Cell::Null);
            }
            trimmed
                .parse::<i8>()
                .map(Cell::Int8)
                .map_err(|_| TableError::Parse {
                    row,
                    column: column.to_string(),
                    value: raw.to_string(),
                    expected: ty,
                })
        }
    }
}
