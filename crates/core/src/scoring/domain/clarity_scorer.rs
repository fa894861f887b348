use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::shared::constants::{CLARITY_MARKER_WORDS, MAX_POS_VARIETY, SATURATING_MARKER_WORDS};
use crate::text::domain::pos_tag::PosTag;

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\b", CLARITY_MARKER_WORDS.join("|"))).expect("valid regex")
});

/// Vocabulary and structure clarity from tag variety and marker-word density.
pub struct ClarityScorer;

impl ClarityScorer {
    /// Returns a value in [0, 1]; 0.0 when either input is empty.
    pub fn score(text: &str, pos_tags: &[PosTag]) -> f64 {
        if text.is_empty() || pos_tags.is_empty() {
            return 0.0;
        }

        let distinct: HashSet<&str> = pos_tags.iter().map(|t| t.tag.as_str()).collect();
        let pos_diversity = (distinct.len() as f64 / MAX_POS_VARIETY).min(1.0);
        let pattern_score = (Self::marker_count(text) as f64 / SATURATING_MARKER_WORDS).min(1.0);

        (0.5 * pos_diversity + 0.5 * pattern_score).clamp(0.0, 1.0)
    }

    /// Case-insensitive whole-word occurrences of the marker words.
    pub fn marker_count(text: &str) -> usize {
        MARKER_RE.find_iter(text).count()
    }
}
