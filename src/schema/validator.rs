//! Schema validator for loaded tables
//!
//! Validation semantics:
//! - Every schema column is present
//! - The table's full column→type mapping equals the schema mapping
//!
//! Forbidden behaviors:
//! - Extra undeclared columns
//! - Implicit type coercion
//! - Partial validation

use super::errors::{SchemaError, SchemaResult, TypeMap};
use super::types::{ColumnSchema, ColumnType};

/// Anything that can report its columns and their declared types.
pub trait ColumnSource {
    /// (column, type) pairs in table order.
    fn column_types(&self) -> Vec<(&str, ColumnType)>;
}

/// Validator bound to one schema.
///
/// Validator does not mutate tables.
/// Validation is deterministic.
pub struct SchemaValidator<'a> {
    schema: &'a ColumnSchema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a ColumnSchema) -> Self {
        Self { schema }
    }

    /// Returns the schema this validator enforces.
    pub fn schema(&self) -> &ColumnSchema {
        self.schema
    }

    /// Validates a table against the schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if:
    /// - A schema column is absent (DECKGEN_SCHEMA_MISSING_COLUMNS)
    /// - The table has extra columns or a column type differs
    ///   (DECKGEN_SCHEMA_TYPE_MISMATCH)
    pub fn validate<T: ColumnSource + ?Sized>(&self, table: &T) -> SchemaResult<()> {
        let columns = table.column_types();
        let expected = self.schema.to_map();

        // Presence first, so the error names the missing column
        for name in self.schema.column_names() {
            if !columns.iter().any(|(column, _)| *column == name) {
                return Err(SchemaError::missing_column(
                    name,
                    expected,
                    to_type_map(&columns),
                ));
            }
        }

        // Exact mapping equality over all of the table's columns
        let actual = to_type_map(&columns);
        if actual != expected {
            return Err(SchemaError::type_mismatch(expected, actual));
        }

        Ok(())
    }
}

/// Validates `table` against `schema`.
pub fn validate<T: ColumnSource + ?Sized>(table: &T, schema: &ColumnSchema) -> SchemaResult<()> {
    SchemaValidator::new(schema).validate(table)
}

fn to_type_map(columns: &[(&str, ColumnType)]) -> TypeMap {
    columns
        .iter()
        .map(|(name, ty)| (name.to_string(), *ty))
        .collect()
}
