//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in a deck generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// Blank template written
    TemplateWritten,
    /// Definition table loaded and validated
    CatalogLoaded,
    /// One deck built with all images resolved
    DeckBuilt,
    /// Archive written
    ArchiveWritten,
    /// Definition rows left out of every deck
    RowsSkipped,
    /// Run aborted
    RunFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TemplateWritten => "TEMPLATE_WRITTEN",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::DeckBuilt => "DECK_BUILT",
            Event::ArchiveWritten => "ARCHIVE_WRITTEN",
            Event::RowsSkipped => "ROWS_SKIPPED",
            Event::RunFailed => "RUN_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
