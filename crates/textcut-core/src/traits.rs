//! Core traits defining the interfaces between components.

use crate::types::Prediction;

/// Single-label language identification for one line of text.
///
/// Implementations are built once and shared read-only across documents, so
/// `predict` takes `&self` and must tolerate concurrent calls.
pub trait LanguageClassifier: Send + Sync {
    /// Predict the most likely language code for `line` (top-1 only).
    ///
    /// A classifier without a strong signal still returns some fallback code
    /// rather than failing.
    fn predict(&self, line: &str) -> Prediction;

    /// Name of the classifier, used in logs.
    fn name(&self) -> &str;
}
