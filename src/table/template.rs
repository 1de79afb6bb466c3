//! Blank definition template
//!
//! A template is a table with the schema's columns and a single row of blank
//! cells, for users to fill in. Generation is pure; writing it out is up to
//! the caller.

use crate::schema::ColumnSchema;

use super::{Cell, Table};

/// Blank template for the multi-deck catalog schema.
pub fn generate_template() -> Table {
    generate_template_for(&ColumnSchema::catalog())
}

/// Blank template for any schema.
pub fn generate_template_for(schema: &ColumnSchema) -> Table {
    let mut table = Table::with_schema(schema);
    table
        .rows
        .push(vec![Cell::Null; schema.len()]);
    table
}
