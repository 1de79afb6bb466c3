//! Cards and decks

use uuid::Uuid;

use crate::image::Image;

/// Card size used when none is given
pub const DEFAULT_CARD_SIZE: u32 = 2;

/// One playing card with its two faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    identifier: String,
    name: String,
    front: Image,
    back: Image,
    size: u32,
}

impl Card {
    pub fn new(name: impl Into<String>, front: Image, back: Image, size: u32) -> Self {
        Self {
            identifier: Uuid::new_v4().to_string(),
            name: name.into(),
            front,
            back,
            size,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Face image (`image_top`)
    pub fn front(&self) -> &Image {
        &self.front
    }

    /// Back image (`image_bottom`)
    pub fn back(&self) -> &Image {
        &self.back
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// A named, ordered stack of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    identifier: String,
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            identifier: Uuid::new_v4().to_string(),
            name: name.into(),
            cards,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in definition order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(bytes: &[u8]) -> Image {
        Image::new(bytes.to_vec(), "x.png")
    }

    #[test]
    fn test_card_accessors() {
        let card = Card::new("Fireball", image(b"front"), image(b"back"), DEFAULT_CARD_SIZE);
        assert_eq!(card.name(), "Fireball");
        assert_eq!(card.front().data(), b"front");
        assert_eq!(card.back().data(), b"back");
        assert_eq!(card.size(), 2);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let a = Card::new("A", image(b"1"), image(b"2"), 2);
        let b = Card::new("A", image(b"1"), image(b"2"), 2);
        assert_ne!(a.identifier(), b.identifier());

        let deck1 = Deck::new("D", vec![]);
        let deck2 = Deck::new("D", vec![]);
        assert_ne!(deck1.identifier(), deck2.identifier());
    }

    #[test]
    fn test_deck_keeps_order() {
        let deck = Deck::new(
            "Spells",
            vec![
                Card::new("First", image(b"1"), image(b"b"), 2),
                Card::new("Second", image(b"2"), image(b"b"), 2),
            ],
        );
        let names: Vec<_> = deck.cards().iter().map(Card::name).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(deck.len(), 2);
    }
}
