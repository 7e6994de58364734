//! Heuristic token estimation.
//!
//! The estimate is a fast, language-aware proxy for what a subword tokenizer
//! would charge. It is deterministic and linear in the input length, but it
//! is not a tokenizer and will not match any model's exact count.

use std::sync::LazyLock;

use regex::Regex;

/// ASCII letter runs with a word boundary on both sides. `\b` is Unicode
/// aware, so a run glued to digits or other letters does not count.
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("word pattern is valid"));

/// Curly quotes counted as punctuation on top of ASCII punctuation. This is
/// a fixed list, not a Unicode punctuation category test: CJK full-width
/// marks such as `，` and `。` are not counted.
const EXTRA_PUNCTUATION: [char; 4] = ['\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Counts that make up a token estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenBreakdown {
    /// ASCII words.
    pub words: usize,

    /// CJK unified ideographs, each weighted twice in the total.
    pub cjk_chars: usize,

    /// ASCII punctuation plus curly quotes.
    pub punctuation: usize,

    /// Unicode whitespace characters.
    pub whitespace: usize,
}

impl TokenBreakdown {
    /// Weighted total.
    pub fn total(&self) -> usize {
        self.words + self.cjk_chars * 2 + self.punctuation + self.whitespace
    }
}

/// Language-aware token estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenEstimator;

impl TokenEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate the token cost of `text`.
    pub fn estimate(&self, text: &str) -> usize {
        self.breakdown(text).total()
    }

    /// Individual counts behind [`estimate`](Self::estimate).
    pub fn breakdown(&self, text: &str) -> TokenBreakdown {
        let mut breakdown = TokenBreakdown {
            words: WORD.find_iter(text).count(),
            ..TokenBreakdown::default()
        };

        for c in text.chars() {
            if is_cjk_unified_ideograph(c) {
                breakdown.cjk_chars += 1;
            } else if c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c) {
                breakdown.punctuation += 1;
            } else if c.is_whitespace() {
                breakdown.whitespace += 1;
            }
        }

        breakdown
    }
}

/// Check whether `c` is in the CJK Unified Ideographs block or one of its
/// extensions. Compatibility ideographs are excluded.
pub fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF
            | 0x2A700..=0x2B73F
            | 0x2B740..=0x2B81F
            | 0x2B820..=0x2CEAF
            | 0x2CEB0..=0x2EBEF
            | 0x30000..=0x3134F
            | 0x31350..=0x323AF
    )
}
