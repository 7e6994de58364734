//! Greedy, sentence-atomic chunk packing.

use textcut_core::{Chunk, LanguageConfig, Sentence};
use tracing::{debug, warn};

use crate::estimate::TokenEstimator;

/// Packs consecutive sentences into chunks under a token ceiling.
///
/// Single pass: a sentence joins the open chunk if the combined estimate
/// stays within `max_tokens`, otherwise the open chunk is closed and the
/// sentence starts the next one. Sentences are never split, so a sentence
/// that alone exceeds the ceiling becomes its own oversized chunk.
pub struct ChunkPacker {
    /// Overrides [`TokenEstimator`] when set.
    token_counter: Option<Box<dyn Fn(&str) -> usize + Send + Sync>>,
}

impl ChunkPacker {
    /// Create a packer using the default token estimator.
    pub fn new() -> Self {
        Self {
            token_counter: None,
        }
    }

    /// Create a packer with a custom token counter.
    pub fn with_token_counter<F>(counter: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self {
            token_counter: Some(Box::new(counter)),
        }
    }

    fn count_tokens(&self, text: &str) -> usize {
        match &self.token_counter {
            Some(counter) => counter(text),
            None => TokenEstimator.estimate(text),
        }
    }

    /// Pack `sentences` into chunks numbered from 1.
    pub fn pack<'a, I>(&self, sentences: I, config: &LanguageConfig) -> Vec<Chunk>
    where
        I: IntoIterator<Item = Sentence<'a>>,
    {
        let mut chunks = Vec::new();
        let mut open = OpenChunk::default();

        for sentence in sentences {
            let before = open.text.len();
            open.text.push_str(sentence.text);

            if self.count_tokens(&open.text) <= config.max_tokens {
                open.extend(&sentence);
                continue;
            }

            open.text.truncate(before);
            if let Some(chunk) = self.close(&mut open, chunks.len() + 1, config) {
                chunks.push(chunk);
            }
            open.text.push_str(sentence.text);
            open.extend(&sentence);
        }

        if let Some(chunk) = self.close(&mut open, chunks.len() + 1, config) {
            chunks.push(chunk);
        }

        debug!(
            chunks = chunks.len(),
            max_tokens = config.max_tokens,
            "Packed sentences into chunks"
        );

        chunks
    }

    /// Emit the open chunk, if it holds anything, and reset it.
    fn close(&self, open: &mut OpenChunk, index: usize, config: &LanguageConfig) -> Option<Chunk> {
        let open = std::mem::take(open);
        let content = open.text.trim();
        if content.is_empty() {
            return None;
        }

        let leading = open.text.len() - open.text.trim_start().len();
        let trailing = open.text.len() - open.text.trim_end().len();
        let token_estimate = self.count_tokens(content);

        if token_estimate > config.max_tokens {
            warn!(
                chunk = index,
                tokens = token_estimate,
                max_tokens = config.max_tokens,
                "Sentence exceeds token budget, emitting it as its own chunk"
            );
        }

        Some(Chunk {
            index,
            content: content.to_string(),
            token_estimate,
            sentence_count: open.sentence_count,
            byte_range: open.start + leading..open.end - trailing,
        })
    }
}

impl Default for ChunkPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulator for the chunk being filled.
#[derive(Default)]
struct OpenChunk {
    text: String,
    start: usize,
    end: usize,
    sentence_count: usize,
}

impl OpenChunk {
    /// Record that `sentence` (already appended to `text`) is part of the chunk.
    fn extend(&mut self, sentence: &Sentence<'_>) {
        if self.sentence_count == 0 {
            self.start = sentence.start;
        }
        self.end = sentence.end();
        self.sentence_count += 1;
    }
}
