//! Schema error types
//!
//! Error codes:
//! - DECKGEN_SCHEMA_MISSING_COLUMNS
//! - DECKGEN_SCHEMA_TYPE_MISMATCH
//! - DECKGEN_SCHEMA_NULL_VALUE
//!
//! Schema errors are never auto-corrected; they abort the operation that
//! detected them.

use std::collections::BTreeMap;
use std::fmt;

use super::types::ColumnType;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// A required column is absent
    MissingColumns,
    /// Column set or column types differ from the schema
    TypeMismatch,
    /// A required cell is blank
    NullValue,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::MissingColumns => "DECKGEN_SCHEMA_MISSING_COLUMNS",
            SchemaErrorCode::TypeMismatch => "DECKGEN_SCHEMA_TYPE_MISMATCH",
            SchemaErrorCode::NullValue => "DECKGEN_SCHEMA_NULL_VALUE",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Column name to type, as compared by the validator.
pub type TypeMap = BTreeMap<String, ColumnType>;

/// Schema error with expected/actual context
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Offending column, if one can be named
    column: Option<String>,
    /// Zero-based data row, for cell-level errors
    row: Option<usize>,
    expected: TypeMap,
    actual: TypeMap,
}

impl SchemaError {
    /// A required column is not present in the table
    pub fn missing_column(column: impl Into<String>, expected: TypeMap, actual: TypeMap) -> Self {
        let column = column.into();
        Self {
            code: SchemaErrorCode::MissingColumns,
            message: format!("Missing the required column '{}'", column),
            column: Some(column),
            row: None,
            expected,
            actual,
        }
    }

    /// Table columns and types do not exactly match the schema
    pub fn type_mismatch(expected: TypeMap, actual: TypeMap) -> Self {
        let column = first_difference(&expected, &actual);
        let message = match &column {
            Some(name) => format!("Column types do not match the expected schema at '{}'", name),
            None => "Column types do not match the expected schema".to_string(),
        };
        Self {
            code: SchemaErrorCode::TypeMismatch,
            message,
            column,
            row: None,
            expected,
            actual,
        }
    }

    /// A cell that must hold a value is blank
    pub fn null_value(column: impl Into<String>, row: usize) -> Self {
        let column = column.into();
        Self {
            code: SchemaErrorCode::NullValue,
            message: format!("Row {} has no value for column '{}'", row, column),
            column: Some(column),
            row: Some(row),
            expected: TypeMap::new(),
            actual: TypeMap::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending column, if known
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the offending row, for cell-level errors
    pub fn row(&self) -> Option<usize> {
        self.row
    }

    /// Returns the expected column types
    pub fn expected(&self) -> &TypeMap {
        &self.expected
    }

    /// Returns the column types actually found
    pub fn actual(&self) -> &TypeMap {
        &self.actual
    }
}

/// First column (alphabetically) present in only one map or typed differently.
fn first_difference(expected: &TypeMap, actual: &TypeMap) -> Option<String> {
    expected
        .keys()
        .chain(actual.keys())
        .filter(|name| expected.get(*name) != actual.get(*name))
        .min()
        .cloned()
}

fn write_map(f: &mut fmt::Formatter<'_>, map: &TypeMap) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (name, ty)) in map.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", name, ty)?;
    }
    write!(f, "}}")
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if self.code != SchemaErrorCode::NullValue {
            write!(f, "\n  expected: ")?;
            write_map(f, &self.expected)?;
            write!(f, "\n  actual  : ")?;
            write_map(f, &self.actual)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
