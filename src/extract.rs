//! Deck-code extraction from free-form message text.
//!
//! Detection runs an ordered list of pattern strategies; the first one
//! that hits wins and the rest are not consulted.

use regex::Regex;

/// Two-character prefix that marks a high-confidence deck code
pub const CODE_SIGIL: &str = "%%";

/// Character set deck codes draw from when pasted without the sigil
const CODE_ALPHABET: &str = r"A-Za-z0-9%|;,_\-";

/// Default length bounds for a bare (sigil-less) code candidate
pub const DEFAULT_MIN_CODE_LEN: usize = 10;
pub const DEFAULT_MAX_CODE_LEN: usize = 200;

/// A deck code lifted out of user text.
///
/// Opaque: no checksum or internal structure is validated, the token
/// is carried verbatim to the deck-builder URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCode(String);

impl DeckCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeckCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length bounds for the bare-token fallback
#[derive(Debug, Clone, Copy)]
pub struct ExtractLimits {
    pub min_code_len: usize,
    pub max_code_len: usize,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self {
            min_code_len: DEFAULT_MIN_CODE_LEN,
            max_code_len: DEFAULT_MAX_CODE_LEN,
        }
    }
}

/// One way of spotting a code in text
type Strategy = fn(&str, ExtractLimits) -> Option<DeckCode>;

/// Strategies in priority order: sigil-prefixed first, bare token second
const STRATEGIES: &[Strategy] = &[sigil_code, bare_code];

/// Find the most likely deck code in `text`, if any.
///
/// `None` means "no code detected", a normal outcome the caller
/// branches on, not a failure.
pub fn extract(text: &str) -> Option<DeckCode> {
    extract_with(text, ExtractLimits::default())
}

/// [`extract`] with explicit length bounds for the bare-token fallback
pub fn extract_with(text: &str, limits: ExtractLimits) -> Option<DeckCode> {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text, limits))
}

/// Leftmost `%%`-prefixed run of non-whitespace, returned sigil included
fn sigil_code(text: &str, _limits: ExtractLimits) -> Option<DeckCode> {
    let pattern = Regex::new(&format!(r"{}\S+", regex::escape(CODE_SIGIL))).unwrap();
    pattern.find(text).map(|m| DeckCode(m.as_str().to_string()))
}

/// Leftmost run over the code alphabet within the configured length
/// bounds. Codes are sometimes pasted without the sigil, so this match
/// is deliberately loose.
fn bare_code(text: &str, limits: ExtractLimits) -> Option<DeckCode> {
    let pattern = Regex::new(&format!(
        "[{}]{{{},{}}}",
        CODE_ALPHABET, limits.min_code_len, limits.max_code_len
    ))
    .unwrap();
    pattern.find(text).map(|m| DeckCode(m.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigil_match_stops_at_whitespace() {
        let code = extract("please import %%ABC123|X deck").unwrap();
        assert_eq!(code.as_str(), "%%ABC123|X");
    }

    #[test]
    fn sigil_wins_over_an_earlier_bare_token() {
        let code = extract("AAAABBBBCCCC then %%Z1").unwrap();
        assert_eq!(code.as_str(), "%%Z1");
    }

    #[test]
    fn first_sigil_occurrence_is_returned() {
        let code = extract("%%first %%second").unwrap();
        assert_eq!(code.as_str(), "%%first");
    }

    #[test]
    fn bare_token_within_bounds_is_accepted() {
        let code = extract("code ABC123;x_-9 here").unwrap();
        assert_eq!(code.as_str(), "ABC123;x_-9");
    }

    #[test]
    fn short_runs_are_not_codes() {
        assert!(extract("short n0pe").is_none());
    }

    #[test]
    fn plain_words_yield_no_code() {
        assert!(extract("no code here just words").is_none());
    }

    #[test]
    fn empty_input_yields_no_code() {
        assert!(extract("").is_none());
    }

    #[test]
    fn custom_bounds_apply_to_the_bare_fallback() {
        let limits = ExtractLimits {
            min_code_len: 4,
            max_code_len: 200,
        };
        let code = extract_with("code here", limits).unwrap();
        assert_eq!(code.as_str(), "code");
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "noise %%A|B;C noise";
        assert_eq!(extract(text), extract(text));
    }
}
