//! # Deckpeek
//!
//! Spots game deck codes in free-form text and summarises the matching
//! deck-builder page.
//!
//! ## How it works
//!
//! - **Code extraction**: an ordered list of pattern strategies finds
//!   the most likely deck code in a message, sigil-prefixed matches first
//! - **Page summarisation**: known markup selectors first, a line-shape
//!   heuristic over the page text as the last resort
//! - **Plumbing**: URL building, fetching and reply rendering around the
//!   two heuristics

pub mod builder;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod render;
pub mod summarize;
pub mod summary;

pub use config::Config;
pub use extract::DeckCode;
pub use summary::PageSummary;
