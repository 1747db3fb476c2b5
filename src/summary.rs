//! PageSummary - the structured record a deck page boils down to.

use serde::{Deserialize, Serialize};

/// Best-effort summary of a deck-builder page.
///
/// Absent fields are `None`, never an empty-string sentinel, so
/// callers can tell "nothing found" apart from "found but empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Deck title, from the page's first non-empty heading
    pub title: Option<String>,
    /// One-line deck metadata (faction, card count and the like)
    pub meta_line: Option<String>,
    /// Card names in document order, capped at the configured maximum
    pub cards: Vec<String>,
}

impl PageSummary {
    /// Check whether anything at all was recovered from the page
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.meta_line.is_none() && self.cards.is_empty()
    }
}
