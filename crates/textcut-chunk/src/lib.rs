//! textcut-chunk - Language-aware sentence chunking
//!
//! This crate splits a document into chunks of whole sentences, each kept
//! under an approximate token ceiling chosen for the document's language.
//!
//! # Pipeline
//!
//! - [`LanguageDetector`]: majority vote of a per-line [`LanguageClassifier`].
//! - [`SentenceSegmenter`]: splits on the language's sentence boundary.
//! - [`ChunkPacker`]: greedily groups sentences using [`TokenEstimator`].
//! - [`TextSplitter`]: runs all of the above.
//!
//! # Example
//!
//! ```rust
//! use textcut_chunk::TextSplitter;
//!
//! let splitter = TextSplitter::default();
//! let output = splitter.split("Hello world. This is a test.");
//! assert_eq!(output.chunks.len(), 1);
//! ```

mod classifier;
mod detect;
mod estimate;
mod pack;
mod segment;
mod splitter;

pub use classifier::{ScriptClassifier, UNDETERMINED};
pub use detect::LanguageDetector;
pub use estimate::{is_cjk_unified_ideograph, TokenBreakdown, TokenEstimator};
pub use pack::ChunkPacker;
pub use segment::{SentenceSegmenter, Sentences};
pub use splitter::TextSplitter;

// Re-export types for convenience
pub use textcut_core::{
    Chunk, CutConfig, Language, LanguageClassifier, LanguageConfig, Prediction, Sentence,
    SentenceBoundary, SplitOutput,
};
