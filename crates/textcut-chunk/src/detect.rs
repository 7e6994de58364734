//! Document language detection by per-line majority vote.

use std::collections::HashMap;
use std::sync::Arc;

use textcut_core::{Language, LanguageClassifier};
use tracing::{debug, trace};

/// Picks the dominant language of a document.
///
/// Every line (empty lines included) is classified on its own and the most
/// frequent code wins. On a tie the code that reached the winning count
/// first, scanning lines in order, is kept.
#[derive(Clone)]
pub struct LanguageDetector {
    classifier: Arc<dyn LanguageClassifier>,
}

impl LanguageDetector {
    /// Create a detector around a shared classifier.
    pub fn new(classifier: Arc<dyn LanguageClassifier>) -> Self {
        Self { classifier }
    }

    /// Detect the coarse language of `text`.
    ///
    /// Blank documents are [`Language::Other`].
    pub fn detect(&self, text: &str) -> Language {
        let language = self
            .detect_code(text)
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();
        debug!(%language, "Detected document language");
        language
    }

    /// Most frequent raw classifier code, or `None` for a blank document.
    ///
    /// Ties go to the code that reached the top count first, not to the
    /// code that appeared first.
    pub fn detect_code(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut best: Option<(String, usize)> = None;

        for (line_no, line) in text.split('\n').enumerate() {
            let prediction = self.classifier.predict(line);
            trace!(
                line = line_no + 1,
                code = %prediction.code,
                confidence = prediction.confidence,
                "Classified line"
            );

            let count = counts.entry(prediction.code.clone()).or_insert(0);
            *count += 1;

            let leads = best.as_ref().map_or(true, |(_, top)| *count > *top);
            if leads {
                best = Some((prediction.code, *count));
            }
        }

        debug!(
            classifier = self.classifier.name(),
            distinct_codes = counts.len(),
            "Tallied line predictions"
        );

        best.map(|(code, _)| code)
    }
}

impl std::fmt::Debug for LanguageDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDetector")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
