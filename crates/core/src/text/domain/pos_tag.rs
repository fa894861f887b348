use serde::{Deserialize, Serialize};

/// A word paired with its part-of-speech category (Penn Treebank style, e.g. `NN`, `VBZ`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PosTag {
    pub word: String,
    pub tag: String,
}

impl PosTag {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_from_object() {
        let tag: PosTag = serde_json::from_str(r#"{"word": "cat", "tag": "NN"}"#).unwrap();
        assert_eq!(tag, PosTag::new("cat", "NN"));
    }
}
