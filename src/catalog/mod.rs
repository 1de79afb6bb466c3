//! Deck catalog
//!
//! A catalog wraps the full multi-deck definition table. The `deck` column
//! partitions rows into one group per deck name; each group becomes a
//! `DeckDefinition` and then a `Deck` once its images are resolved.
//!
//! # Invariants
//!
//! - The table matches the catalog schema exactly (checked on construction,
//!   and nothing else is)
//! - Rows with a blank `deck` belong to no deck and are never built
//! - The table is never mutated, only filtered
//! - A deck is returned whole or not at all

mod definition;
mod errors;

pub use definition::{CardRecord, DeckDefinition};
pub use errors::{CatalogError, CatalogResult};

use std::collections::BTreeSet;

use crate::image::ImageLoader;
use crate::schema::{validate, ColumnSchema, SchemaError, SchemaResult, DECK};
use crate::table::{Table, TableError};
use crate::tabletop::{Deck, DEFAULT_CARD_SIZE};

/// Validated multi-deck definition table.
#[derive(Debug, Clone)]
pub struct DeckCatalog {
    table: Table,
}

impl DeckCatalog {
    /// Wrap and validate a catalog table.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the table's columns do not exactly match the
    /// catalog schema.
    pub fn new(table: Table) -> SchemaResult<Self> {
        validate(&table, &ColumnSchema::catalog())?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Distinct deck names.
    ///
    /// Only set semantics are promised; callers must not depend on ordering.
    pub fn unique_deck_names(&self) -> BTreeSet<String> {
        self.table.unique_strings(DECK).unwrap_or_default()
    }

    /// Indexes of rows with a blank `deck`.
    pub fn unassigned_rows(&self) -> Vec<usize> {
        self.table
            .rows()
            .filter(|row| row.get(DECK).map_or(true, |cell| cell.is_null()))
            .map(|row| row.index())
            .collect()
    }

    /// Deck-level definition for one deck name.
    ///
    /// A name with no rows yields an empty definition.
    pub fn definition(&self, deck_name: &str) -> SchemaResult<DeckDefinition> {
        let table = self
            .table
            .filter_eq(DECK, deck_name)
            .and_then(|rows| rows.drop_column(DECK))
            .map_err(column_missing)?;

        DeckDefinition::new(deck_name, table)
    }

    /// Build one deck with the default card size.
    pub fn get_deck<L: ImageLoader + ?Sized>(&self, deck_name: &str, images: &L) -> CatalogResult<Deck> {
        self.get_deck_with_size(deck_name, images, DEFAULT_CARD_SIZE)
    }

    /// Build one deck, giving every card `card_size`.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Schema` if the deck's rows fail the deck schema
    /// - `CatalogError::ImageNotFound` if any referenced image is missing;
    ///   no partial deck is returned
    pub fn get_deck_with_size<L: ImageLoader + ?Sized>(
        &self,
        deck_name: &str,
        images: &L,
        card_size: u32,
    ) -> CatalogResult<Deck> {
        self.definition(deck_name)?.build(images, card_size)
    }
}

/// The catalog schema guarantees `deck`; reaching this means the table
/// changed shape after validation.
fn column_missing(e: TableError) -> SchemaError {
    let column = match e {
        TableError::UnknownColumn(column) => column,
        _ => DECK.to_string(),
    };
    SchemaError::missing_column(column, ColumnSchema::catalog().to_map(), Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Image, ImageError, ImageResult};
    use crate::schema::{ColumnType, SchemaErrorCode};
    use crate::table::{Cell, Column};
    use std::cell::Cell as Counter;

    struct CountingImages {
        calls: Counter<usize>,
    }

    impl CountingImages {
        fn new() -> Self {
            Self {
                calls: Counter::new(0),
            }
        }
    }

    impl ImageLoader for CountingImages {
        fn load(&self, reference: &str) -> ImageResult<Image> {
            self.calls.set(self.calls.get() + 1);
            Ok(Image::new(reference.as_bytes().to_vec(), reference))
        }
    }

    struct NoImages;

    impl ImageLoader for NoImages {
        fn load(&self, reference: &str) -> ImageResult<Image> {
            Err(ImageError::NotFound(reference.to_string()))
        }
    }

    fn catalog_table(rows: &[(&str, &str, &str, &str, i8)]) -> Table {
        let mut table = Table::with_schema(&ColumnSchema::catalog());
        for (name, top, bottom, deck, count) in rows {
            table
                .push_row(vec![
                    (*name).into(),
                    (*top).into(),
                    (*bottom).into(),
                    (*deck).into(),
                    Cell::Int8(*count),
                ])
                .unwrap();
        }
        table
    }

    fn spells() -> Table {
        catalog_table(&[
            ("Fireball", "a.png", "b.png", "Spells", 2),
            ("Heal", "c.png", "b.png", "Spells", 1),
        ])
    }

    #[test]
    fn test_construction_validates() {
        let table = Table::with_schema(&ColumnSchema::deck());
        let err = DeckCatalog::new(table).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::MissingColumns);
        assert_eq!(err.column(), Some("deck"));
    }

    #[test]
    fn test_extra_column_rejected() {
        let mut columns: Vec<Column> = ColumnSchema::catalog()
            .columns()
            .iter()
            .map(|(name, ty)| Column::new(name.clone(), *ty))
            .collect();
        columns.push(Column::new("rarity", ColumnType::String));

        let err = DeckCatalog::new(Table::new(columns)).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::TypeMismatch);
    }

    #[test]
    fn test_blank_deck_constructs() {
        let mut table = Table::with_schema(&ColumnSchema::catalog());
        table
            .push_row(vec!["A".into(), "a".into(), "b".into(), Cell::Null, Cell::Int8(1)])
            .unwrap();

        let catalog = DeckCatalog::new(table).unwrap();
        assert!(catalog.unique_deck_names().is_empty());
        assert_eq!(catalog.unassigned_rows(), vec![0]);
    }

    #[test]
    fn test_blank_deck_rows_skipped() {
        let mut table = spells();
        table
            .push_row(vec!["Stray".into(), "s.png".into(), "b.png".into(), Cell::Null, Cell::Int8(1)])
            .unwrap();

        let catalog = DeckCatalog::new(table).unwrap();
        let images = CountingImages::new();
        let deck = catalog.get_deck("Spells", &images).unwrap();

        let names: Vec<&str> = deck.cards().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Fireball", "Heal"]);
        assert_eq!(images.calls.get(), 4);
        assert_eq!(catalog.unassigned_rows(), vec![2]);
    }

    #[test]
    fn test_unique_deck_names() {
        let catalog = DeckCatalog::new(spells()).unwrap();
        let names = catalog.unique_deck_names();
        assert_eq!(names.len(), 1);
        assert!(names.contains("Spells"));
    }

    #[test]
    fn test_get_deck_scenario() {
        let catalog = DeckCatalog::new(spells()).unwrap();
        let images = CountingImages::new();

        let deck = catalog.get_deck("Spells", &images).unwrap();
        assert_eq!(deck.name(), "Spells");
        assert_eq!(deck.cards()[0].name(), "Fireball");
        assert_eq!(deck.cards()[1].name(), "Heal");
        assert!(deck.cards().iter().all(|c| c.size() == DEFAULT_CARD_SIZE));
        // b.png is read once per referencing row
        assert_eq!(images.calls.get(), 4);
    }

    #[test]
    fn test_unknown_deck_is_empty() {
        let catalog = DeckCatalog::new(spells()).unwrap();
        let deck = catalog.get_deck("Nonexistent", &NoImages).unwrap();
        assert_eq!(deck.name(), "Nonexistent");
        assert!(deck.is_empty());
    }

    #[test]
    fn test_missing_image_aborts() {
        let catalog = DeckCatalog::new(spells()).unwrap();
        let err = catalog.get_deck("Spells", &NoImages).unwrap_err();
        assert!(matches!(err, CatalogError::ImageNotFound(_)));
    }

    #[test]
    fn test_definition_drops_deck_column() {
        let catalog = DeckCatalog::new(spells()).unwrap();
        let definition = catalog.definition("Spells").unwrap();
        assert!(definition.table().column_index("deck").is_none());
        assert_eq!(definition.table().len(), 2);
    }

    #[test]
    fn test_decks_are_disjoint() {
        let table = catalog_table(&[
            ("Fireball", "a", "b", "Spells", 1),
            ("Goblin", "g", "b", "Monsters", 3),
            ("Heal", "c", "b", "Spells", 1),
        ]);
        let catalog = DeckCatalog::new(table).unwrap();
        let images = CountingImages::new();

        let total: usize = catalog
            .unique_deck_names()
            .iter()
            .map(|name| catalog.get_deck(name, &images).unwrap().len())
            .sum();
        assert_eq!(total, 3);
        assert_eq!(catalog.definition("Monsters").unwrap().table().len(), 1);
    }
}
