//! Reply formatting for a summarised deck.

use crate::extract::CODE_SIGIL;
use crate::summary::PageSummary;

/// How many cards the reply shows. Separate from the extraction cap:
/// the summary may hold up to 40 entries, the reply previews fewer.
pub const DEFAULT_PREVIEW_COUNT: usize = 12;

/// Fixed closing line of every successful reply
const IMPORT_TIP: &str =
    "Tip: open New Deck in the game client with the code on your clipboard and it will offer to import it.";

/// Sizing for the rendered reply
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub preview_count: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preview_count: DEFAULT_PREVIEW_COUNT,
        }
    }
}

/// Format the full reply: summary lines, the builder link, the import tip
pub fn render_reply(summary: &PageSummary, builder_url: &str, options: RenderOptions) -> String {
    let mut lines = summary_lines(summary, options);
    lines.push(String::new());
    lines.push(format!("Deck builder link: {builder_url}"));
    lines.push(IMPORT_TIP.to_string());
    lines.join("\n")
}

/// Format only the summary lines (title, meta, capped card preview).
/// Empty string when nothing was recovered from the page.
pub fn render_summary(summary: &PageSummary, options: RenderOptions) -> String {
    summary_lines(summary, options).join("\n")
}

/// Notice for input with no recognisable deck code
pub fn render_no_code() -> String {
    format!(
        "No deck code detected. Paste the code after the command or include one starting with '{CODE_SIGIL}'."
    )
}

/// Fallback reply when the builder page could not be fetched: the
/// constructed link still goes out so the user can open it manually.
pub fn render_fetch_failure(builder_url: &str, error: impl std::fmt::Display) -> String {
    format!(
        "Built the deck builder link: {builder_url}\n\
         Fetching the page failed: {error}\n\
         Open the link in a browser to check and import the deck manually."
    )
}

fn summary_lines(summary: &PageSummary, options: RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(title) = &summary.title {
        lines.push(format!("Deck name: {title}"));
    }
    if let Some(meta) = &summary.meta_line {
        lines.push(meta.clone());
    }
    if !summary.cards.is_empty() {
        lines.push(format!(
            "Card preview (up to the first {} shown):",
            options.preview_count
        ));
        for card in summary.cards.iter().take(options.preview_count) {
            lines.push(format!("  - {card}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_with_cards(count: usize) -> PageSummary {
        PageSummary {
            title: Some("My Deck".to_string()),
            meta_line: Some("Axis 40 cards".to_string()),
            cards: (0..count).map(|i| format!("Card {i}")).collect(),
        }
    }

    #[test]
    fn preview_is_capped_independently_of_extraction() {
        let reply = render_reply(
            &summary_with_cards(40),
            "https://x/y?hash=z",
            RenderOptions::default(),
        );
        let shown = reply.lines().filter(|l| l.starts_with("  - ")).count();
        assert_eq!(shown, DEFAULT_PREVIEW_COUNT);
        assert!(reply.contains("Deck builder link: https://x/y?hash=z"));
    }

    #[test]
    fn short_card_lists_are_shown_in_full() {
        let reply = render_reply(
            &summary_with_cards(3),
            "https://x",
            RenderOptions::default(),
        );
        let shown = reply.lines().filter(|l| l.starts_with("  - ")).count();
        assert_eq!(shown, 3);
    }

    #[test]
    fn absent_fields_produce_no_lines() {
        let reply = render_reply(&PageSummary::default(), "https://x", RenderOptions::default());
        assert!(!reply.contains("Deck name:"));
        assert!(!reply.contains("Card preview"));
        assert!(reply.contains("Deck builder link: https://x"));
    }

    #[test]
    fn summary_only_rendering_has_no_link() {
        let text = render_summary(&summary_with_cards(2), RenderOptions::default());
        assert!(text.starts_with("Deck name: My Deck"));
        assert!(!text.contains("Deck builder link"));
    }

    #[test]
    fn fetch_failure_reply_carries_the_link() {
        let reply = render_fetch_failure("https://x/y?hash=z", "connection refused");
        assert!(reply.contains("https://x/y?hash=z"));
        assert!(reply.contains("connection refused"));
    }

    #[test]
    fn no_code_notice_names_the_sigil() {
        assert!(render_no_code().contains("%%"));
    }
}
