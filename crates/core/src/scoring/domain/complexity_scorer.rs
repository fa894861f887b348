use crate::shared::constants::SATURATING_SENTENCE_WORDS;
use crate::text::domain::word_tokenizer::WordTokenizer;

/// Sentence complexity as mean normalized sentence length.
pub struct ComplexityScorer;

impl ComplexityScorer {
    /// Returns a value in [0, 1]; 0.0 for no sentences.
    pub fn score(sentences: &[String], tokenizer: &dyn WordTokenizer) -> f64 {
        if sentences.is_empty() {
            return 0.0;
        }

        let total: f64 = sentences
            .iter()
            .map(|s| {
                let words = tokenizer.tokenize(s).len() as f64;
                (words / SATURATING_SENTENCE_WORDS).min(1.0)
            })
            .sum();

        total / sentences.len() as f64
    }
}
