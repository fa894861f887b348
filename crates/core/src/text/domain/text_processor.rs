use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::pos_tag::PosTag;
use super::pos_tagger::PosTagger;
use super::sentence_splitter::SentenceSplitter;
use super::word_tokenizer::WordTokenizer;
use crate::shared::config::TextConfig;
use crate::shared::constants::ENGLISH_STOPWORDS;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Everything except word characters, whitespace and basic punctuation.
static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:-]").expect("valid regex"));

/// Transcript after cleaning, split into its linguistic parts.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedText {
    pub text: String,
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    /// `words` without stopwords when stopword removal is enabled, else a copy of `words`.
    pub words_filtered: Vec<String>,
    pub pos_tags: Vec<PosTag>,
}

/// Descriptive statistics of a processed transcript.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextProfile {
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub sentence_length_std: f64,
    pub total_sentences: usize,
    pub total_words: usize,
}

/// Prepares raw ASR output for the scoring engine using the text collaborators.
pub struct TextProcessor {
    splitter: Box<dyn SentenceSplitter>,
    tokenizer: Box<dyn WordTokenizer>,
    tagger: Box<dyn PosTagger>,
    config: TextConfig,
}

impl TextProcessor {
    pub fn new(
        splitter: Box<dyn SentenceSplitter>,
        tokenizer: Box<dyn WordTokenizer>,
        tagger: Box<dyn PosTagger>,
        config: TextConfig,
    ) -> Self {
        Self {
            splitter,
            tokenizer,
            tagger,
            config,
        }
    }

    /// Collapse whitespace, then drop characters outside `\w`, whitespace and `.,!?;:-`.
    pub fn clean(text: &str) -> String {
        let collapsed = WHITESPACE_RE.replace_all(text, " ");
        SPECIAL_CHAR_RE
            .replace_all(collapsed.trim(), "")
            .into_owned()
    }

    pub fn preprocess(&self, raw: &str) -> ProcessedText {
        let mut text = Self::clean(raw);
        if self.config.lowercase {
            text = text.to_lowercase();
        }

        let sentences = self.splitter.split(&text);
        let words = self.tokenizer.tokenize(&text);
        let pos_tags = self.tagger.tag(&words);
        let words_filtered = if self.config.remove_stopwords {
            Self::remove_stopwords(&words)
        } else {
            words.clone()
        };

        ProcessedText {
            text,
            sentences,
            words,
            words_filtered,
            pos_tags,
        }
    }

    /// Drop common English function words, compared case-insensitively.
    pub fn remove_stopwords(words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| !ENGLISH_STOPWORDS.contains(&w.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    pub fn profile(&self, processed: &ProcessedText) -> TextProfile {
        let total_sentences = processed.sentences.len();
        let total_words = processed.words.len();

        let avg_sentence_length = if total_sentences > 0 {
            total_words as f64 / total_sentences as f64
        } else {
            0.0
        };

        let avg_word_length = if total_words > 0 {
            let chars: usize = processed.words.iter().map(|w| w.chars().count()).sum();
            chars as f64 / total_words as f64
        } else {
            0.0
        };

        let lengths: Vec<f64> = processed
            .sentences
            .iter()
            .map(|s| self.tokenizer.tokenize(s).len() as f64)
            .collect();

        TextProfile {
            avg_sentence_length,
            avg_word_length,
            sentence_length_std: population_std(&lengths),
            total_sentences,
            total_words,
        }
    }
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
