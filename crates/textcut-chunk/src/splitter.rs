//! End-to-end splitting pipeline.

use std::sync::Arc;

use textcut_core::{CutConfig, Language, LanguageClassifier, SplitOutput};
use tracing::debug;

use crate::classifier::ScriptClassifier;
use crate::detect::LanguageDetector;
use crate::pack::ChunkPacker;
use crate::segment::SentenceSegmenter;

/// Detects the language of a document, segments it with that language's
/// boundary rule and packs the sentences under that language's ceiling.
///
/// Holds no per-document state, so one splitter can serve many documents
/// from many threads.
pub struct TextSplitter {
    detector: LanguageDetector,
    segmenter: SentenceSegmenter,
    packer: ChunkPacker,
    config: CutConfig,
}

impl TextSplitter {
    /// Create a splitter around a shared classifier.
    pub fn new(classifier: Arc<dyn LanguageClassifier>, config: CutConfig) -> Self {
        Self {
            detector: LanguageDetector::new(classifier),
            segmenter: SentenceSegmenter::new(),
            packer: ChunkPacker::new(),
            config,
        }
    }

    /// Create a splitter using the built-in [`ScriptClassifier`].
    pub fn with_script_classifier(config: CutConfig) -> Self {
        Self::new(Arc::new(ScriptClassifier::new()), config)
    }

    /// The language detector.
    pub fn detector(&self) -> &LanguageDetector {
        &self.detector
    }

    /// Split a document, detecting its language first.
    pub fn split(&self, text: &str) -> SplitOutput {
        let language = self.detector.detect(text);
        self.split_as(text, language)
    }

    /// Split a document with the profile of a known language.
    pub fn split_as(&self, text: &str, language: Language) -> SplitOutput {
        let profile = self.config.languages.for_language(language);
        let sentences = self.segmenter.segment(text, profile.sentence_boundary);
        let chunks = self.packer.pack(sentences, profile);

        debug!(
            %language,
            bytes = text.len(),
            chunks = chunks.len(),
            "Split document"
        );

        SplitOutput {
            language,
            max_tokens: profile.max_tokens,
            chunks,
        }
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::with_script_classifier(CutConfig::default())
    }
}
