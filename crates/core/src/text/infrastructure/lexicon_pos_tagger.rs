use crate::text::domain::pos_tag::PosTag;
use crate::text::domain::pos_tagger::PosTagger;

/// Rule-based tagger producing Penn Treebank tags.
///
/// Closed-class words come from a fixed lexicon; open-class words fall back
/// to suffix heuristics, then `NN`. Good enough to give the clarity scorer a
/// realistic tag spread without a trained model.
pub struct LexiconPosTagger;

impl LexiconPosTagger {
    fn tag_word(word: &str, index: usize) -> &'static str {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return ".";
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return "CD";
        }

        let lower = word.to_lowercase();
        if let Some(tag) = closed_class(&lower) {
            return tag;
        }

        if index > 0 && word.chars().next().is_some_and(char::is_uppercase) {
            return "NNP";
        }
        if lower.len() > 3 && lower.ends_with("ly") {
            return "RB";
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return "VBG";
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return "VBD";
        }
        if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
            return "NNS";
        }
        "NN"
    }
}

fn closed_class(word: &str) -> Option<&'static str> {
    let tag = match word {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "every" | "each" | "some"
        | "any" | "no" | "all" => "DT",
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them" => "PRP",
        "my" | "your" | "his" | "her" | "its" | "our" | "their" => "PRP$",
        "in" | "on" | "at" | "of" | "for" | "with" | "from" | "by" | "about" | "into" | "over"
        | "under" | "after" | "before" | "between" | "through" | "during" | "without" | "if"
        | "because" | "while" | "although" | "since" | "unless" | "than" => "IN",
        "to" => "TO",
        "and" | "but" | "or" | "nor" | "so" | "yet" => "CC",
        "will" | "would" | "should" | "could" | "can" | "may" | "might" | "must" | "shall" => "MD",
        "is" | "has" | "does" => "VBZ",
        "are" | "am" | "have" | "do" => "VBP",
        "was" | "were" | "had" | "did" => "VBD",
        "be" => "VB",
        "been" => "VBN",
        "being" => "VBG",
        "when" | "where" | "why" | "how" => "WRB",
        "who" | "what" | "which" | "whom" => "WP",
        "not" | "very" | "too" | "also" | "just" | "never" | "always" | "often" | "now"
        | "then" | "here" | "today" | "fast" => "RB",
        "there" => "EX",
        _ => return None,
    };
    Some(tag)
}

impl PosTagger for LexiconPosTagger {
    fn tag(&self, words: &[String]) -> Vec<PosTag> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| PosTag::new(w.clone(), Self::tag_word(w, i)))
            .collect()
    }
}
