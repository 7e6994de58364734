//! Core domain types for textcut.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

use crate::error::CutError;

/// Coarse language of a document, selects the splitting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Chinese,
    English,
    Other,
}

impl Language {
    /// Map a raw classifier code to a language.
    ///
    /// Codes match exactly: `zh-cn` and `zh-tw` are Chinese, `en` is
    /// English and everything else (including `zh`, unknown or empty codes)
    /// is Other.
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh-cn" | "zh-tw" => Self::Chinese,
            "en" => Self::English,
            _ => Self::Other,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Other
    }
}

impl FromStr for Language {
    type Err = CutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh-tw" | "chinese" => Ok(Self::Chinese),
            "en" | "english" => Ok(Self::English),
            "other" => Ok(Self::Other),
            other => Err(CutError::invalid_argument(format!(
                "unknown language '{}', expected one of: zh, en, other",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Chinese => "Chinese",
            Self::English => "English",
            Self::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// Sentence boundary rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceBoundary {
    /// Split after `。`, `！` or `？`, consuming any following whitespace.
    CjkTerminal,

    /// Split after `.` when followed by at least one whitespace character,
    /// which is consumed.
    LatinPeriod,
}

impl SentenceBoundary {
    /// Regex for one boundary. Group 1 is the terminal punctuation that stays
    /// with the preceding sentence; the rest of the match is discarded.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::CjkTerminal => r"([。！？])\s*",
            Self::LatinPeriod => r"(\.)\s+",
        }
    }
}

/// Top-1 prediction from a language classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw language code, e.g. `en` or `zh-cn`.
    pub code: String,

    /// Classifier confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Prediction {
    /// Create a prediction from a bare code.
    pub fn new(code: impl Into<String>, confidence: f32) -> Self {
        Self {
            code: code.into(),
            confidence,
        }
    }

    /// Create a prediction from a fastText-style label such as `__label__en`.
    pub fn from_label(label: &str, confidence: f32) -> Self {
        let code = label.rsplit("__label__").next().unwrap_or(label);
        Self::new(code, confidence)
    }
}

/// A sentence borrowed from the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Sentence text, terminal punctuation included.
    pub text: &'a str,

    /// Byte offset of `text` within the document.
    pub start: usize,
}

impl<'a> Sentence<'a> {
    /// Create a sentence at the given byte offset.
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// Byte offset one past the end of the sentence.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// A chunk of whole sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position in emission order (1-based).
    pub index: usize,

    /// Concatenated sentence text, trimmed.
    pub content: String,

    /// Estimated token cost of `content`.
    pub token_estimate: usize,

    /// Number of sentences packed into this chunk.
    pub sentence_count: usize,

    /// Extent of the chunk in the source document, boundary whitespace
    /// between its sentences included.
    pub byte_range: Range<usize>,
}

/// Result of splitting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutput {
    /// Language the splitting profile was chosen for.
    pub language: Language,

    /// Token ceiling that was applied.
    pub max_tokens: usize,

    /// Chunks in document order.
    pub chunks: Vec<Chunk>,
}

impl SplitOutput {
    /// Look up a chunk by its 1-based index.
    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        index.checked_sub(1).and_then(|i| self.chunks.get(i))
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if the document produced no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
