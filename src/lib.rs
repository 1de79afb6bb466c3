//! udon-deckgen - build Udonarium room archives from a CSV deck definition
//!
//! A definition CSV lists one card per row with the deck it belongs to.
//! Rows are validated against a fixed column schema, grouped into decks,
//! their images resolved from a directory, and the result written as a zip
//! archive that Udonarium can load.

pub mod catalog;
pub mod cli;
pub mod image;
pub mod observability;
pub mod schema;
pub mod table;
pub mod tabletop;
