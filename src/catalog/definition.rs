//! Single-deck definition
//!
//! A `DeckDefinition` is a deck name plus a table in the deck-level schema
//! (`name`, `image_top`, `image_bottom`, `number_of`). It is validated on
//! construction and turned into a `Deck` by resolving every row's images.

use crate::image::ImageLoader;
use crate::schema::{
    validate, ColumnSchema, SchemaError, SchemaResult, IMAGE_BOTTOM, IMAGE_TOP, NAME, NUMBER_OF,
};
use crate::table::{Row, Table};
use crate::tabletop::{Card, Deck};

use super::errors::CatalogResult;

/// One row of deck-level data, before image resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub name: String,
    pub image_top: String,
    pub image_bottom: String,
    /// Validated, not used when building cards
    pub number_of: Option<i8>,
}

impl CardRecord {
    fn from_row(row: &Row<'_>) -> SchemaResult<Self> {
        Ok(Self {
            name: required_str(row, NAME)?,
            image_top: required_str(row, IMAGE_TOP)?,
            image_bottom: required_str(row, IMAGE_BOTTOM)?,
            number_of: row.get(NUMBER_OF).and_then(|cell| cell.as_i8()),
        })
    }
}

fn required_str(row: &Row<'_>, column: &str) -> SchemaResult<String> {
    row.get(column)
        .and_then(|cell| cell.as_str())
        .map(str::to_string)
        .ok_or_else(|| SchemaError::null_value(column, row.index()))
}

/// A validated single-deck table.
#[derive(Debug, Clone)]
pub struct DeckDefinition {
    name: String,
    table: Table,
}

impl DeckDefinition {
    /// Wrap a deck-level table.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if `table` does not exactly match the deck schema.
    pub fn new(name: impl Into<String>, table: Table) -> SchemaResult<Self> {
        validate(&table, &ColumnSchema::deck())?;
        Ok(Self {
            name: name.into(),
            table,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Card records in row order.
    ///
    /// Fails on the first row with a blank `name`, `image_top` or
    /// `image_bottom`.
    pub fn records(&self) -> SchemaResult<Vec<CardRecord>> {
        self.table
            .rows()
            .map(|row| CardRecord::from_row(&row))
            .collect()
    }

    /// Build the deck, loading `image_top` then `image_bottom` for each row.
    ///
    /// The first image that fails to load aborts the whole deck.
    pub fn build<L: ImageLoader + ?Sized>(&self, images: &L, card_size: u32) -> CatalogResult<Deck> {
        let records = self.records()?;

        let mut cards = Vec::with_capacity(records.len());
        for record in records {
            let front = images.load(&record.image_top)?;
            let back = images.load(&record.image_bottom)?;
            cards.push(Card::new(record.name, front, back, card_size));
        }

        Ok(Deck::new(self.name.clone(), cards))
    }
}
