//! Deck-builder URL construction.

use crate::extract::DeckCode;

/// Default deck-builder endpoint codes are resolved against
pub const DEFAULT_BUILDER_BASE: &str = "https://www.kards.com/decks/deck-builder";

/// Builder-page URL for a deck code.
///
/// The site expects the code percent-encoded in the `hash` query
/// parameter. The code itself usually starts with `%%`, so nothing is
/// treated as safe: every non-unreserved character is escaped.
pub fn deck_builder_url(base: &str, code: &DeckCode) -> String {
    format!("{}?hash={}", base, urlencoding::encode(code.as_str()))
}
