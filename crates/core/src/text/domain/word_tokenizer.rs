/// Domain interface for splitting text into word tokens.
///
/// The token count is what the engine reports as `total_words`.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}
