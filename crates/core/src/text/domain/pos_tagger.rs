use super::pos_tag::PosTag;

/// Domain interface for part-of-speech tagging of already-tokenized words.
pub trait PosTagger: Send + Sync {
    fn tag(&self, words: &[String]) -> Vec<PosTag>;
}
