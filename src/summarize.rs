//! Page summarisation: structured selectors first, text heuristics last.
//!
//! Deck-builder pages are rendered client-side and their markup shifts
//! between releases, so extraction is best-effort: known selectors
//! first, then a line-shape heuristic over the page text.

use regex::Regex;
use scraper::{Html, Selector};

use crate::summary::PageSummary;

/// Ceiling on extracted card entries, shared by both extraction paths
pub const DEFAULT_MAX_CARDS: usize = 40;

/// Card-list selectors, most specific first
const CARD_SELECTORS: &str = ".deck-card, .card-name, .card";

/// Meta-line selectors, tried in order
const META_SELECTORS: &[&str] = &[".deck-meta", ".deck-info"];

/// Shape of a plausible card-name line: capitalised start, then a
/// short run of name-ish characters. Permissive; it only runs when no
/// structured card markup exists at all.
const CARD_LINE_PATTERN: &str = r"^[A-Z][A-Za-z0-9'().,: -]{2,50}$";

/// Sizing for card extraction
#[derive(Debug, Clone, Copy)]
pub struct SummarizeLimits {
    pub max_cards: usize,
}

impl Default for SummarizeLimits {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
        }
    }
}

/// Summarise an HTML document into a [`PageSummary`].
///
/// Total over its input: malformed or unexpected markup degrades to a
/// summary with absent fields, never an error.
pub fn summarize(html: &str) -> PageSummary {
    summarize_with(html, SummarizeLimits::default())
}

/// [`summarize`] with an explicit card cap
pub fn summarize_with(html: &str, limits: SummarizeLimits) -> PageSummary {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let meta_line = extract_meta_line(&document);

    // Structured extraction wins outright when any card element exists
    let mut cards = structured_cards(&document, limits.max_cards);
    if cards.is_empty() {
        cards = heuristic_cards(&document, limits.max_cards);
    }

    PageSummary {
        title,
        meta_line,
        cards,
    }
}

/// First `h1` with non-empty text, in document order
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").unwrap();
    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .find(|text| !text.is_empty())
}

/// First non-empty meta element, `.deck-meta` before `.deck-info`
fn extract_meta_line(document: &Html) -> Option<String> {
    META_SELECTORS.iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).unwrap();
        document
            .select(&selector)
            .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
            .find(|text| !text.is_empty())
    })
}

/// Card names from the known card selectors, in document order
fn structured_cards(document: &Html, max_cards: usize) -> Vec<String> {
    let selector = Selector::parse(CARD_SELECTORS).unwrap();
    document
        .select(&selector)
        .map(|element| collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
        .filter(|name| !name.is_empty())
        .take(max_cards)
        .collect()
}

/// Last resort: accept page-text lines shaped like card names, in
/// order, until the stream ends or the cap is reached
fn heuristic_cards(document: &Html, max_cards: usize) -> Vec<String> {
    let pattern = Regex::new(CARD_LINE_PATTERN).unwrap();
    let text = document.root_element().text().collect::<String>();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| pattern.is_match(line))
        .take(max_cards)
        .map(str::to_string)
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_empty_summary() {
        let summary = summarize("");
        assert!(summary.title.is_none());
        assert!(summary.meta_line.is_none());
        assert!(summary.cards.is_empty());
    }

    #[test]
    fn structured_cards_and_title() {
        let html =
            r#"<h1>My Deck</h1><div class="deck-card">Soldier</div><div class="deck-card">Tank</div>"#;
        let summary = summarize(html);
        assert_eq!(summary.title.as_deref(), Some("My Deck"));
        assert!(summary.meta_line.is_none());
        assert_eq!(summary.cards, vec!["Soldier", "Tank"]);
    }

    #[test]
    fn structured_path_suppresses_heuristic_lines() {
        // "Panzer IV" would pass the line heuristic, but one structured
        // card element exists, so the heuristic path never runs.
        let html = "<div class=\"card\">Soldier</div>\n<p>Panzer IV</p>";
        let summary = summarize(html);
        assert_eq!(summary.cards, vec!["Soldier"]);
    }

    #[test]
    fn heuristic_accepts_card_shaped_lines_only() {
        let html = "<body><p>Panzer IV</p>\n<p>not capitalised</p>\n<p>T-34</p></body>";
        let summary = summarize(html);
        assert_eq!(summary.cards, vec!["Panzer IV", "T-34"]);
    }

    #[test]
    fn meta_selectors_are_tried_in_order() {
        let html =
            r#"<div class="deck-info">Allies 40 cards</div><div class="deck-meta">Soviet</div>"#;
        assert_eq!(summarize(html).meta_line.as_deref(), Some("Soviet"));
    }

    #[test]
    fn blank_meta_falls_through_to_the_next_selector() {
        let html =
            r#"<div class="deck-meta">  </div><div class="deck-info">Allies 40 cards</div>"#;
        assert_eq!(
            summarize(html).meta_line.as_deref(),
            Some("Allies 40 cards")
        );
    }

    #[test]
    fn meta_text_is_whitespace_collapsed() {
        let html = "<div class=\"deck-meta\">Axis\n      30 cards</div>";
        assert_eq!(summarize(html).meta_line.as_deref(), Some("Axis 30 cards"));
    }

    #[test]
    fn blank_heading_falls_through_to_the_next() {
        let html = "<h1>   </h1><h1>Armoured Push</h1>";
        assert_eq!(summarize(html).title.as_deref(), Some("Armoured Push"));
    }

    #[test]
    fn card_cap_applies_to_the_structured_path() {
        let html: String = (0..60)
            .map(|i| format!("<div class=\"card\">Card {i}</div>"))
            .collect();
        assert_eq!(summarize(&html).cards.len(), DEFAULT_MAX_CARDS);
    }

    #[test]
    fn card_cap_applies_to_the_heuristic_path() {
        let html: String = (0..60).map(|i| format!("<p>Card number {i}</p>\n")).collect();
        assert_eq!(summarize(&html).cards.len(), DEFAULT_MAX_CARDS);
    }

    #[test]
    fn custom_cap_is_honoured() {
        let html: String = (0..10)
            .map(|i| format!("<div class=\"card\">Card {i}</div>"))
            .collect();
        let summary = summarize_with(&html, SummarizeLimits { max_cards: 3 });
        assert_eq!(summary.cards, vec!["Card 0", "Card 1", "Card 2"]);
    }

    #[test]
    fn blank_structured_entries_are_skipped() {
        let html = r#"<div class="deck-card">  </div><div class="deck-card">Soldier</div>"#;
        assert_eq!(summarize(html).cards, vec!["Soldier"]);
    }
}
