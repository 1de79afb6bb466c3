//! Tabletop model
//!
//! Builds the objects a virtual tabletop room is made of and packages them
//! into a save archive.
//!
//! # Components
//!
//! - `Card` / `Deck`: named cards with face and back images
//! - `GameTable` / `Room`: the table and the decks placed on it
//! - archive: `Room::write_zip` writes `data.xml` plus images

mod archive;
mod card;
mod room;
mod xml;

pub use archive::{ArchiveError, ArchiveResult, ArchiveSummary, DATA_XML};
pub use card::{Card, Deck, DEFAULT_CARD_SIZE};
pub use room::{GameTable, PlacedDeck, Room, TableBackground, DEFAULT_BACKGROUND_IDENTIFIER};
