//! Game table and room composition
//!
//! A room is one game table plus the decks placed on it. It renders to the
//! `data.xml` document of an Udonarium save archive:
//!
//! ```xml
//! <room>
//!   <game-table name="Table" ...></game-table>
//!   <card-stack location.x="0" location.y="0" ...>
//!     <data name="card-stack">...</data>
//!     <node name="cardRoot">
//!       <card ...>...</card>
//!     </node>
//!   </card-stack>
//! </room>
//! ```

use std::collections::HashSet;

use crate::image::Image;

use super::card::{Card, Deck};
use super::xml::XmlWriter;

/// Built-in background image identifier
pub const DEFAULT_BACKGROUND_IDENTIFIER: &str = "testTableBackgroundImage_image";

/// Table size in grid cells
const TABLE_WIDTH: u32 = 20;
const TABLE_HEIGHT: u32 = 15;
const GRID_SIZE: u32 = 50;

/// Cards in a stack lie face down
const CARD_STATE_BACK: &str = "1";

/// Table background image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBackground {
    /// The tabletop's built-in image, not stored in the archive
    Default,
    /// An image shipped inside the archive
    Custom(Image),
}

impl TableBackground {
    pub fn identifier(&self) -> &str {
        match self {
            TableBackground::Default => DEFAULT_BACKGROUND_IDENTIFIER,
            TableBackground::Custom(image) => image.identifier(),
        }
    }
}

/// The surface decks are placed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTable {
    name: String,
    background: TableBackground,
}

impl GameTable {
    pub fn new(name: impl Into<String>, background: TableBackground) -> Self {
        Self {
            name: name.into(),
            background,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> &TableBackground {
        &self.background
    }
}

/// A deck at a table position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedDeck {
    pub deck: Deck,
    pub x: i32,
    pub y: i32,
}

/// One table and everything on it.
#[derive(Debug, Clone)]
pub struct Room {
    table: GameTable,
    decks: Vec<PlacedDeck>,
}

impl Room {
    pub fn new(table: GameTable) -> Self {
        Self {
            table,
            decks: Vec::new(),
        }
    }

    /// Place a deck at (`x`, `y`).
    pub fn add_deck(&mut self, deck: Deck, x: i32, y: i32) {
        self.decks.push(PlacedDeck { deck, x, y });
    }

    pub fn table(&self) -> &GameTable {
        &self.table
    }

    pub fn decks(&self) -> &[PlacedDeck] {
        &self.decks
    }

    /// Every distinct image the room references, in first-use order.
    pub fn images(&self) -> Vec<&Image> {
        let mut seen = HashSet::new();
        let mut images = Vec::new();

        let background = match &self.table.background {
            TableBackground::Custom(image) => Some(image),
            TableBackground::Default => None,
        };
        let card_images = self
            .decks
            .iter()
            .flat_map(|placed| placed.deck.cards())
            .flat_map(|card| [card.front(), card.back()]);

        for image in background.into_iter().chain(card_images) {
            if seen.insert(image.identifier()) {
                images.push(image);
            }
        }

        images
    }

    /// Render the room as `data.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlWriter::new();
        xml.open("room", &[]);

        let width = TABLE_WIDTH.to_string();
        let height = TABLE_HEIGHT.to_string();
        let grid = GRID_SIZE.to_string();
        xml.open(
            "game-table",
            &[
                ("name", self.table.name()),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("gridSize", grid.as_str()),
                ("imageIdentifier", self.table.background().identifier()),
                ("backgroundImageIdentifier", "imageIdentifier"),
                ("backgroundFilterType", ""),
                ("selected", "true"),
                ("gridType", "0"),
                ("gridColor", "#000000e6"),
            ],
        );
        xml.close("game-table");

        for placed in &self.decks {
            write_card_stack(&mut xml, placed);
        }

        xml.close("room");
        xml.finish()
    }
}

fn write_card_stack(xml: &mut XmlWriter, placed: &PlacedDeck) {
    let x = placed.x.to_string();
    let y = placed.y.to_string();

    xml.open(
        "card-stack",
        &[
            ("identifier", placed.deck.identifier()),
            ("location.name", "table"),
            ("location.x", x.as_str()),
            ("location.y", y.as_str()),
            ("posZ", "0"),
            ("rotate", "0"),
            ("zindex", "0"),
            ("owner", ""),
            ("isShowTotal", "true"),
        ],
    );
    xml.open("data", &[("name", "card-stack")]);
    xml.open("data", &[("name", "image")]);
    xml.leaf("data", &[("type", "image"), ("name", "imageIdentifier")], "");
    xml.close("data");
    xml.open("data", &[("name", "common")]);
    xml.leaf("data", &[("name", "name")], placed.deck.name());
    xml.close("data");
    xml.leaf("data", &[("name", "detail")], "");
    xml.close("data");

    xml.open("node", &[("name", "cardRoot")]);
    for card in placed.deck.cards() {
        write_card(xml, card, &x, &y);
    }
    xml.close("node");

    xml.close("card-stack");
}

fn write_card(xml: &mut XmlWriter, card: &Card, x: &str, y: &str) {
    let size = card.size().to_string();

    xml.open(
        "card",
        &[
            ("identifier", card.identifier()),
            ("location.name", "table"),
            ("location.x", x),
            ("location.y", y),
            ("posZ", "0"),
            ("state", CARD_STATE_BACK),
            ("rotate", "0"),
            ("owner", ""),
            ("zindex", "0"),
        ],
    );
    xml.open("data", &[("name", "card")]);
    xml.open("data", &[("name", "image")]);
    xml.leaf("data", &[("type", "image"), ("name", "imageIdentifier")], "");
    xml.leaf("data", &[("type", "image"), ("name", "front")], card.front().identifier());
    xml.leaf("data", &[("type", "image"), ("name", "back")], card.back().identifier());
    xml.close("data");
    xml.open("data", &[("name", "common")]);
    xml.leaf("data", &[("name", "name")], card.name());
    xml.leaf("data", &[("name", "size")], &size);
    xml.close("data");
    xml.leaf("data", &[("name", "detail")], "");
    xml.close("data");
    xml.close("card");
}
