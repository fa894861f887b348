use std::sync::LazyLock;

use regex::Regex;

use crate::text::domain::word_tokenizer::WordTokenizer;

/// Letters/digits, allowing internal apostrophes and hyphens (`don't`, `well-known`).
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("valid regex")
});

/// Word-only tokenizer: punctuation is never a token.
pub struct RegexWordTokenizer;

impl WordTokenizer for RegexWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("", 0)]
    #[case::punctuation_only("... !? ,", 0)]
    #[case::reference_sentence("The cat is sleeping. The dog runs fast in the park today.", 12)]
    #[case::contraction("I don't know", 3)]
    #[case::hyphenated("a well-known fact", 3)]
    #[case::numbers("it costs 3.50", 4)]
    fn test_token_counts(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(RegexWordTokenizer.tokenize(text).len(), expected);
    }

    #[test]
    fn test_tokens_exclude_punctuation() {
        assert_eq!(
            RegexWordTokenizer.tokenize("Hello, world!"),
            vec!["Hello", "world"]
        );
    }
}
