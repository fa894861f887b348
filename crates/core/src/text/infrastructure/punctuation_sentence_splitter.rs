use std::sync::LazyLock;

use regex::Regex;

use crate::text::domain::sentence_splitter::SentenceSplitter;

/// Terminal punctuation, optional closing quotes/brackets, then whitespace or end of text.
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.!?]+["'”’)\]]*(?:\s+|$)"#).expect("valid regex"));

/// Splits on sentence-final punctuation. No abbreviation handling.
pub struct PunctuationSentenceSplitter;

impl SentenceSplitter for PunctuationSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for m in SENTENCE_END_RE.find_iter(text) {
            push_trimmed(&mut sentences, &text[start..m.end()]);
            start = m.end();
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}
