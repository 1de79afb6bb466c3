//! Observability for deck generation runs
//!
//! Structured JSON-lines logging of run events.
//!
//! # Usage
//!
//! ```ignore
//! use udon_deckgen::observability::{Event, Logger};
//!
//! Logger::info(Event::DeckBuilt, &[("deck", "Spells"), ("cards", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
