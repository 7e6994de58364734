//! Integration tests for the full splitting pipeline.
//!
//! Tests the complete flow: detect → segment → pack.

use std::sync::Arc;
use std::thread;

use textcut_chunk::{
    CutConfig, Language, LanguageClassifier, LanguageConfig, Prediction, SentenceBoundary,
    SentenceSegmenter, TextSplitter, TokenEstimator,
};

/// Mock classifier: lines containing Han characters are `zh-cn`, lines with
/// ASCII letters are `en`, everything else falls back to `und`.
struct MockClassifier;

impl LanguageClassifier for MockClassifier {
    fn predict(&self, line: &str) -> Prediction {
        if line.chars().any(textcut_chunk::is_cjk_unified_ideograph) {
            Prediction::from_label("__label__zh-cn", 0.9)
        } else if line.chars().any(|c| c.is_ascii_alphabetic()) {
            Prediction::from_label("__label__en", 0.9)
        } else {
            Prediction::from_label("__label__und", 0.1)
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Labels every line with the same fastText-style label.
struct FixedClassifier(&'static str);

impl LanguageClassifier for FixedClassifier {
    fn predict(&self, _line: &str) -> Prediction {
        Prediction::from_label(self.0, 0.8)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn splitter_with(english_max: usize, chinese_max: usize) -> TextSplitter {
    let mut config = CutConfig::default();
    config.languages.english = LanguageConfig::new(english_max, SentenceBoundary::LatinPeriod);
    config.languages.chinese = LanguageConfig::new(chinese_max, SentenceBoundary::CjkTerminal);
    TextSplitter::new(Arc::new(MockClassifier), config)
}

fn english_document() -> String {
    let mut text = String::new();
    for paragraph in 0..6 {
        for sentence in 0..5 {
            text.push_str(&format!(
                "Paragraph {} sentence {} talks about splitting text into pieces. ",
                paragraph, sentence
            ));
        }
        text.push('\n');
    }
    text
}

fn chinese_document() -> String {
    "春天来了，花儿都开了。小鸟在树上唱歌！你听到了吗？\n我们一起去公园散步吧。天气真好。\n".repeat(10)
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_reconstruction_english() {
    let text = english_document();
    let splitter = splitter_with(40, 3050);
    let output = splitter.split(&text);

    assert_eq!(output.language, Language::English);
    assert!(output.len() > 1);

    let sentences: String = SentenceSegmenter::new()
        .segment(&text, SentenceBoundary::LatinPeriod)
        .map(|s| s.text)
        .collect();
    let joined: String = output.chunks.iter().map(|c| c.content.as_str()).collect();

    assert_eq!(joined, sentences.trim());
}

#[test]
fn test_reconstruction_chinese() {
    let text = chinese_document();
    let splitter = splitter_with(4000, 30);
    let output = splitter.split(&text);

    assert_eq!(output.language, Language::Chinese);
    assert!(output.len() > 1);

    let sentences: String = SentenceSegmenter::new()
        .segment(&text, SentenceBoundary::CjkTerminal)
        .map(|s| s.text)
        .collect();
    let joined: String = output.chunks.iter().map(|c| c.content.as_str()).collect();

    assert_eq!(joined, sentences.trim());
}

#[test]
fn test_budget_bound() {
    let estimator = TokenEstimator::new();
    let text = english_document();
    let output = splitter_with(25, 3050).split(&text);

    for chunk in &output.chunks {
        assert_eq!(chunk.token_estimate, estimator.estimate(&chunk.content));
        assert!(
            chunk.token_estimate <= output.max_tokens || chunk.sentence_count == 1,
            "chunk {} has {} tokens over {} with {} sentences",
            chunk.index,
            chunk.token_estimate,
            output.max_tokens,
            chunk.sentence_count
        );
    }
}

#[test]
fn test_indices_and_ranges_follow_document_order() {
    let text = english_document();
    let output = splitter_with(40, 3050).split(&text);

    let mut last_end = 0;
    for (i, chunk) in output.chunks.iter().enumerate() {
        assert_eq!(chunk.index, i + 1);
        assert!(chunk.byte_range.start >= last_end);
        assert_eq!(
            strip_whitespace(&text[chunk.byte_range.clone()]),
            strip_whitespace(&chunk.content)
        );
        last_end = chunk.byte_range.end;
    }
}

#[test]
fn test_deterministic() {
    let text = chinese_document();
    let splitter = splitter_with(4000, 50);

    let first = splitter.split(&text);
    let second = splitter.split(&text);
    assert_eq!(first.chunks, second.chunks);
}

#[test]
fn test_mode_selection_example() {
    let splitter = splitter_with(4000, 3050);
    let text = "Hello world\n你好世界\nHow are you";

    assert_eq!(splitter.detector().detect_code(text).as_deref(), Some("en"));
    assert_eq!(splitter.split(text).language, Language::English);
}

#[test]
fn test_oversized_sentence_emitted_verbatim() {
    let sentence = format!("{}.", "word ".repeat(2000).trim_end());
    let splitter = splitter_with(3050, 3050);
    let output = splitter.split(&sentence);

    assert_eq!(output.len(), 1);
    assert_eq!(output.chunks[0].content, sentence);
    assert!(output.chunks[0].token_estimate > 3050);
}

#[test]
fn test_other_language_uses_cjk_rule_and_default_ceiling() {
    let splitter = TextSplitter::new(
        Arc::new(FixedClassifier("__label__fr")),
        CutConfig::default(),
    );
    let output = splitter.split("Bonjour. Ça va！ Très bien。");

    assert_eq!(output.language, Language::Other);
    assert_eq!(output.max_tokens, 3050);
    assert_eq!(output.len(), 1);
    // ASCII periods do not end a sentence under the CJK rule.
    assert_eq!(output.chunks[0].content, "Bonjour. Ça va！Très bien。");
    assert_eq!(output.chunks[0].sentence_count, 2);
}

#[test]
fn test_bare_zh_code_is_other() {
    let splitter = TextSplitter::new(
        Arc::new(FixedClassifier("__label__zh")),
        CutConfig::default(),
    );
    let output = splitter.split("你好。世界。");

    assert_eq!(output.language, Language::Other);
    assert_eq!(output.max_tokens, 3050);
}

#[test]
fn test_empty_input() {
    let output = splitter_with(4000, 3050).split("");
    assert!(output.is_empty());
    assert_eq!(output.language, Language::Other);
}

#[test]
fn test_shared_splitter_across_threads() {
    let splitter = Arc::new(splitter_with(40, 30));
    let expected = splitter.split(&english_document()).chunks;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let splitter = Arc::clone(&splitter);
            thread::spawn(move || splitter.split(&english_document()).chunks)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
