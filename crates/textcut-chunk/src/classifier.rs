//! Built-in script-based language classifier.

use textcut_core::{LanguageClassifier, Prediction};

use crate::estimate::is_cjk_unified_ideograph;

/// Code returned when a line carries no usable signal.
pub const UNDETERMINED: &str = "und";

/// Classifies a line by its dominant writing system.
///
/// Needs no model file, so the pipeline works without a trained
/// classifier. It only tells scripts apart: Han maps to `zh-cn`, any kana
/// to `ja`, Hangul to `ko` and ASCII letters to `en`. Lines with none of
/// these score `und` with zero confidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptClassifier;

impl ScriptClassifier {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Default)]
struct ScriptCounts {
    han: usize,
    kana: usize,
    hangul: usize,
    latin: usize,
}

impl ScriptCounts {
    fn of(line: &str) -> Self {
        let mut counts = Self::default();
        for c in line.chars() {
            if is_cjk_unified_ideograph(c) {
                counts.han += 1;
            } else if matches!(c as u32, 0x3040..=0x30FF | 0x31F0..=0x31FF) {
                counts.kana += 1;
            } else if matches!(c as u32, 0xAC00..=0xD7AF | 0x1100..=0x11FF | 0x3130..=0x318F) {
                counts.hangul += 1;
            } else if c.is_ascii_alphabetic() {
                counts.latin += 1;
            }
        }
        counts
    }

    fn total(&self) -> usize {
        self.han + self.kana + self.hangul + self.latin
    }
}

impl LanguageClassifier for ScriptClassifier {
    fn predict(&self, line: &str) -> Prediction {
        let counts = ScriptCounts::of(line);
        let total = counts.total();
        if total == 0 {
            return Prediction::new(UNDETERMINED, 0.0);
        }

        // Japanese text mixes kanji with kana, so any kana wins over Han.
        let (code, hits) = if counts.kana > 0 {
            ("ja", counts.kana + counts.han)
        } else {
            [
                ("zh-cn", counts.han),
                ("ko", counts.hangul),
                ("en", counts.latin),
            ]
            .into_iter()
            .fold(("zh-cn", 0), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
        };

        Prediction::new(code, hits as f32 / total as f32)
    }

    fn name(&self) -> &str {
        "script"
    }
}
