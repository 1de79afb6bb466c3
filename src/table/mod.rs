//! In-memory typed table
//!
//! A `Table` is a list of columns, each declared with a `ColumnType`, and
//! rows of `Cell`s. The declared column type is what schema validation
//! compares; a blank cell is `Null` and does not change its column's type.
//!
//! Tables are immutable once loaded. Filtering and column removal produce
//! new tables.

mod errors;
mod loader;
mod template;

pub use errors::{TableError, TableResult};
pub use loader::TableLoader;
pub use template::{generate_template, generate_template_for};

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;

use crate::schema::{ColumnSchema, ColumnSource, ColumnType};

/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Str(String),
    Int8(i8),
    Null,
}

impl Cell {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Cell::Int8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Type of the value held, `None` for `Null`.
    pub fn value_type(&self) -> Option<ColumnType> {
        match self {
            Cell::Str(_) => Some(ColumnType::String),
            Cell::Int8(_) => Some(ColumnType::Int8),
            Cell::Null => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Str(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Str(s)
    }
}

impl From<i8> for Cell {
    fn from(v: i8) -> Self {
        Cell::Int8(v)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Str(s) => f.write_str(s),
            Cell::Int8(v) => write!(f, "{}", v),
            Cell::Null => Ok(()),
        }
    }
}

/// Column name with its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Typed, row-oriented table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create an empty table whose columns are the schema's, in schema order.
    pub fn with_schema(schema: &ColumnSchema) -> Self {
        Self::new(
            schema
                .columns()
                .iter()
                .map(|(name, ty)| Column::new(name.clone(), *ty))
                .collect(),
        )
    }

    /// Append a row.
    ///
    /// The row must have one cell per column, and every non-null cell must
    /// hold its column's declared type.
    pub fn push_row(&mut self, row: Vec<Cell>) -> TableResult<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        for (column, cell) in self.columns.iter().zip(&row) {
            if let Some(actual) = cell.value_type() {
                if actual != column.ty {
                    return Err(TableError::CellType {
                        column: column.name.clone(),
                        expected: column.ty,
                        actual,
                    });
                }
            }
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in stored order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(index, cells)| Row {
            table: self,
            index,
            cells,
        })
    }

    /// Rows whose `column` holds exactly the string `value`, in stored order.
    pub fn filter_eq(&self, column: &str, value: &str) -> TableResult<Table> {
        let idx = self.require_column(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| row[idx].as_str() == Some(value))
            .cloned()
            .collect();

        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Copy of the table without `column`.
    pub fn drop_column(&self, column: &str) -> TableResult<Table> {
        let idx = self.require_column(column)?;
        let mut columns = self.columns.clone();
        columns.remove(idx);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(idx);
                row
            })
            .collect();

        Ok(Table { columns, rows })
    }

    /// Distinct non-null string values of `column`.
    pub fn unique_strings(&self, column: &str) -> TableResult<BTreeSet<String>> {
        let idx = self.require_column(column)?;
        Ok(self
            .rows
            .iter()
            .filter_map(|row| row[idx].as_str())
            .map(str::to_string)
            .collect())
    }

    /// Write the table as CSV with a header line. Null cells are blank.
    pub fn write_csv<W: Write>(&self, writer: W) -> TableResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.column_names())?;
        for row in &self.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        csv_writer
            .flush()
            .map_err(|e| TableError::Csv(e.to_string()))?;
        Ok(())
    }

    fn require_column(&self, column: &str) -> TableResult<usize> {
        self.column_index(column)
            .ok_or_else(|| TableError::UnknownColumn(column.to_string()))
    }
}

impl ColumnSource for Table {
    fn column_types(&self) -> Vec<(&str, ColumnType)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.ty))
            .collect()
    }
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// Zero-based position in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let cells = self.cells;
        self.table.column_index(column).map(|idx| &cells[idx])
    }

    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }
}
