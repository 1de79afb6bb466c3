//! Column schema definitions
//!
//! Supported column types:
//! - string: UTF-8 string
//! - int8: 8-bit signed integer
//!
//! A schema is an ordered list of (column, type) pairs. Ordering is kept for
//! display and template generation; comparison is by mapping, so two schemas
//! with the same pairs in a different order are equal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Card display name
pub const NAME: &str = "name";
/// Face image reference
pub const IMAGE_TOP: &str = "image_top";
/// Back image reference
pub const IMAGE_BOTTOM: &str = "image_bottom";
/// Deck key
pub const DECK: &str = "deck";
/// Copies of the card
pub const NUMBER_OF: &str = "number_of";

/// Value type a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 string
    String,
    /// 8-bit signed integer
    Int8,
}

impl ColumnType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Int8 => "int8",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Ordered mapping from column name to required type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    columns: Vec<(String, ColumnType)>,
}

impl ColumnSchema {
    /// Create a schema from ordered (column, type) pairs.
    ///
    /// A repeated column name keeps its first position and takes the last type.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut ordered: Vec<(String, ColumnType)> = Vec::new();
        for (name, ty) in columns {
            let name = name.into();
            match ordered.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = ty,
                None => ordered.push((name, ty)),
            }
        }
        Self { columns: ordered }
    }

    /// Schema of a single deck's card table.
    pub fn deck() -> Self {
        Self::new([
            (NAME, ColumnType::String),
            (IMAGE_TOP, ColumnType::String),
            (IMAGE_BOTTOM, ColumnType::String),
            (NUMBER_OF, ColumnType::Int8),
        ])
    }

    /// Schema of the multi-deck catalog table.
    pub fn catalog() -> Self {
        Self::new([
            (NAME, ColumnType::String),
            (IMAGE_TOP, ColumnType::String),
            (IMAGE_BOTTOM, ColumnType::String),
            (DECK, ColumnType::String),
            (NUMBER_OF, ColumnType::Int8),
        ])
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// (column, type) pairs in declaration order.
    pub fn columns(&self) -> &[(String, ColumnType)] {
        &self.columns
    }

    /// Declared type of a column.
    pub fn type_of(&self, column: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, ty)| *ty)
    }

    /// Whether the schema declares the column.
    pub fn contains(&self, column: &str) -> bool {
        self.type_of(column).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The schema as an order-insensitive mapping.
    pub fn to_map(&self) -> BTreeMap<String, ColumnType> {
        self.columns.iter().cloned().collect()
    }
}

impl PartialEq for ColumnSchema {
    fn eq(&self, other: &Self) -> bool {
        self.to_map() == other.to_map()
    }
}

impl Eq for ColumnSchema {}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, ty)?;
        }
        write!(f, "}}")
    }
}
