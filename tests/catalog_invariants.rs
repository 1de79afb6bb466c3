//! Deck Catalog Invariant Tests
//!
//! - Decks partition the catalog: every row lands in exactly one deck
//! - Card order follows row order; image_top is the face, image_bottom the back
//! - number_of is validated but does not multiply cards
//! - A missing image aborts the whole deck
//! - The catalog is never mutated by building decks

use std::cell::RefCell;
use std::collections::HashMap;

use udon_deckgen::catalog::{CatalogError, DeckCatalog};
use udon_deckgen::image::{Image, ImageError, ImageLoader, ImageResult};
use udon_deckgen::schema::{ColumnSchema, SchemaErrorCode};
use udon_deckgen::table::TableLoader;

// =============================================================================
// Helper Functions
// =============================================================================

/// In-memory images keyed by reference, recording every load.
struct MemoryImages {
    files: HashMap<String, Vec<u8>>,
    loads: RefCell<Vec<String>>,
}

impl MemoryImages {
    fn with(references: &[&str]) -> Self {
        let files = references
            .iter()
            .map(|r| (r.to_string(), format!("bytes of {}", r).into_bytes()))
            .collect();
        Self {
            files,
            loads: RefCell::new(Vec::new()),
        }
    }

    fn loads(&self) -> Vec<String> {
        self.loads.borrow().clone()
    }
}

impl ImageLoader for MemoryImages {
    fn load(&self, reference: &str) -> ImageResult<Image> {
        self.loads.borrow_mut().push(reference.to_string());
        self.files
            .get(reference)
            .map(|data| Image::new(data.clone(), reference))
            .ok_or_else(|| ImageError::NotFound(reference.to_string()))
    }
}

fn catalog(csv: &str) -> DeckCatalog {
    let schema = ColumnSchema::catalog();
    let table = TableLoader::new(&schema).from_reader(csv.as_bytes()).unwrap();
    DeckCatalog::new(table).unwrap()
}

const MIXED: &str = "name,image_top,image_bottom,deck,number_of\n\
                     Fireball,a.png,back.png,Spells,2\n\
                     Goblin,g.png,mback.png,Monsters,3\n\
                     Heal,c.png,back.png,Spells,1\n\
                     Orc,o.png,mback.png,Monsters,1\n";

fn all_images() -> MemoryImages {
    MemoryImages::with(&["a.png", "c.png", "g.png", "o.png", "back.png", "mback.png"])
}

// =============================================================================
// Partition Tests
// =============================================================================

#[test]
fn test_decks_partition_rows() {
    let catalog = catalog(MIXED);
    let images = all_images();

    let names: Vec<String> = catalog.unique_deck_names().into_iter().collect();
    assert_eq!(names, vec!["Monsters".to_string(), "Spells".to_string()]);

    let total: usize = names
        .iter()
        .map(|name| catalog.get_deck(name, &images).unwrap().len())
        .sum();
    assert_eq!(total, catalog.table().len());
}

/// Row order and how often a deck repeats do not change the name set.
#[test]
fn test_deck_names_ignore_row_order_and_repeats() {
    let shuffled = catalog(
        "name,image_top,image_bottom,deck,number_of\n\
         Orc,o.png,mback.png,Monsters,1\n\
         Heal,c.png,back.png,Spells,1\n\
         Goblin,g.png,mback.png,Monsters,3\n\
         Heal,c.png,back.png,Spells,1\n\
         Fireball,a.png,back.png,Spells,2\n\
         Orc,o.png,mback.png,Monsters,1\n",
    );
    let single = catalog(
        "name,image_top,image_bottom,deck,number_of\n\
         Fireball,a.png,back.png,Spells,2\n\
         Goblin,g.png,mback.png,Monsters,3\n",
    );

    let expected = catalog(MIXED).unique_deck_names();
    assert_eq!(shuffled.unique_deck_names(), expected);
    assert_eq!(single.unique_deck_names(), expected);
    assert_eq!(shuffled.unique_deck_names().len(), 2);
}

/// Rows without a deck construct fine and stay out of every deck.
#[test]
fn test_rows_without_deck_are_skipped() {
    let catalog = catalog(
        "name,image_top,image_bottom,deck,number_of\n\
         Fireball,a.png,back.png,Spells,2\n\
         Stray,o.png,back.png,,1\n\
         Heal,c.png,back.png,Spells,1\n",
    );
    let images = all_images();

    assert_eq!(catalog.unassigned_rows(), vec![1]);
    let deck = catalog.get_deck("Spells", &images).unwrap();
    let names: Vec<&str> = deck.cards().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Fireball", "Heal"]);
    assert!(!images.loads().contains(&"o.png".to_string()));
}

#[test]
fn test_card_order_and_faces() {
    let catalog = catalog(MIXED);
    let images = all_images();

    let deck = catalog.get_deck("Monsters", &images).unwrap();
    let names: Vec<&str> = deck.cards().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Goblin", "Orc"]);

    let goblin = &deck.cards()[0];
    assert_eq!(goblin.front().data(), b"bytes of g.png");
    assert_eq!(goblin.back().data(), b"bytes of mback.png");

    // top then bottom, row by row, back image re-read for each row
    assert_eq!(
        images.loads(),
        vec!["g.png", "mback.png", "o.png", "mback.png"]
    );
}

#[test]
fn test_number_of_does_not_multiply_cards() {
    let catalog = catalog(MIXED);
    let deck = catalog.get_deck("Spells", &all_images()).unwrap();
    // Fireball has number_of = 2 but is built once
    assert_eq!(deck.len(), 2);
}

#[test]
fn test_card_size_applies_to_every_card() {
    let catalog = catalog(MIXED);
    let deck = catalog
        .get_deck_with_size("Spells", &all_images(), 5)
        .unwrap();
    assert!(deck.cards().iter().all(|c| c.size() == 5));
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_missing_image_aborts_deck() {
    let catalog = catalog(MIXED);
    let images = MemoryImages::with(&["a.png", "back.png"]);

    let err = catalog.get_deck("Spells", &images).unwrap_err();
    match err {
        CatalogError::ImageNotFound(e) => assert_eq!(e.reference(), "c.png"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_blank_card_name_rejected_before_loading() {
    let catalog = catalog(
        "name,image_top,image_bottom,deck,number_of\n\
         ,a.png,back.png,Spells,1\n",
    );
    let images = all_images();

    let err = catalog.get_deck("Spells", &images).unwrap_err();
    match err {
        CatalogError::Schema(e) => {
            assert_eq!(e.code(), SchemaErrorCode::NullValue);
            assert_eq!(e.column(), Some("name"));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(images.loads().is_empty());
}

#[test]
fn test_unknown_deck_is_empty() {
    let catalog = catalog(MIXED);
    let images = all_images();

    let deck = catalog.get_deck("Traps", &images).unwrap();
    assert!(deck.is_empty());
    assert!(images.loads().is_empty());
}

// =============================================================================
// Immutability Tests
// =============================================================================

#[test]
fn test_catalog_unchanged_by_get_deck() {
    let catalog = catalog(MIXED);
    let before = catalog.table().clone();

    for name in catalog.unique_deck_names() {
        catalog.get_deck(&name, &all_images()).unwrap();
    }
    let _ = catalog.get_deck("Spells", &MemoryImages::with(&[]));

    assert_eq!(catalog.table(), &before);
}
