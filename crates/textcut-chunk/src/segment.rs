//! Sentence segmentation.

use std::sync::LazyLock;

use regex::Regex;
use textcut_core::{Sentence, SentenceBoundary};

static CJK_TERMINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SentenceBoundary::CjkTerminal.pattern()).expect("CJK boundary pattern is valid")
});

static LATIN_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SentenceBoundary::LatinPeriod.pattern()).expect("Latin boundary pattern is valid")
});

fn boundary_regex(boundary: SentenceBoundary) -> &'static Regex {
    match boundary {
        SentenceBoundary::CjkTerminal => &CJK_TERMINAL,
        SentenceBoundary::LatinPeriod => &LATIN_PERIOD,
    }
}

/// Splits text into sentences.
///
/// The terminal punctuation stays with its sentence and the whitespace the
/// boundary consumed is dropped. Pieces that are blank after trimming are
/// skipped, so a trailing boundary never yields an empty sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily segment `text`. Call again to restart.
    pub fn segment<'a>(&self, text: &'a str, boundary: SentenceBoundary) -> Sentences<'a> {
        Sentences {
            regex: boundary_regex(boundary),
            text,
            pos: 0,
        }
    }
}

/// Iterator over the sentences of one document.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    regex: &'static Regex,
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let (end, next_pos) = match self.regex.captures_at(self.text, start) {
                Some(caps) => {
                    let whole = caps.get(0)?;
                    let end = caps.get(1).map_or(whole.end(), |m| m.end());
                    (end, whole.end())
                }
                None => (self.text.len(), self.text.len()),
            };
            self.pos = next_pos;

            let piece = &self.text[start..end];
            if !piece.trim().is_empty() {
                return Some(Sentence::new(piece, start));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, boundary: SentenceBoundary) -> Vec<&str> {
        SentenceSegmenter::new()
            .segment(text, boundary)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_cjk_split() {
        let sentences = texts("今天天气很好。我们去公园吧！好吗？", SentenceBoundary::CjkTerminal);
        assert_eq!(sentences, vec!["今天天气很好。", "我们去公园吧！", "好吗？"]);
    }

    #[test]
    fn test_cjk_consumes_following_whitespace() {
        let sentences = texts("第一句。 \n第二句。", SentenceBoundary::CjkTerminal);
        assert_eq!(sentences, vec!["第一句。", "第二句。"]);
    }

    #[test]
    fn test_cjk_rule_ignores_ascii_period() {
        let sentences = texts("One. Two. 三。", SentenceBoundary::CjkTerminal);
        assert_eq!(sentences, vec!["One. Two. 三。"]);
    }

    #[test]
    fn test_latin_split() {
        let sentences = texts("Hello world. This is a test.  Done", SentenceBoundary::LatinPeriod);
        assert_eq!(sentences, vec!["Hello world.", "This is a test.", "Done"]);
    }

    #[test]
    fn test_latin_needs_whitespace_after_period() {
        let sentences = texts("Pi is 3.14 roughly. Yes.", SentenceBoundary::LatinPeriod);
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn test_trailing_boundary_yields_no_empty_sentence() {
        let sentences = texts("End.\n\n", SentenceBoundary::LatinPeriod);
        assert_eq!(sentences, vec!["End."]);

        assert!(texts("", SentenceBoundary::CjkTerminal).is_empty());
        assert!(texts("   \n", SentenceBoundary::CjkTerminal).is_empty());
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "A. B.  C.";
        for sentence in SentenceSegmenter::new().segment(text, SentenceBoundary::LatinPeriod) {
            assert_eq!(&text[sentence.start..sentence.end()], sentence.text);
        }
    }

    #[test]
    fn test_restartable() {
        let segmenter = SentenceSegmenter::new();
        let text = "一。二。三。";
        let first: Vec<_> = segmenter.segment(text, SentenceBoundary::CjkTerminal).collect();
        let second: Vec<_> = segmenter.segment(text, SentenceBoundary::CjkTerminal).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }
}
