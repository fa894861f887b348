use serde::Serialize;

use super::error_report::ErrorReport;

/// Component scores on a 0-100 scale, rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub grammar: f64,
    pub complexity: f64,
    pub fluency: f64,
    pub clarity: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScoringStatistics {
    pub total_words: usize,
    pub total_sentences: usize,
    pub avg_sentence_length: f64,
}

impl ScoringStatistics {
    pub fn new(total_words: usize, total_sentences: usize) -> Self {
        let avg_sentence_length = if total_sentences > 0 {
            total_words as f64 / total_sentences as f64
        } else {
            0.0
        };
        Self {
            total_words,
            total_sentences,
            avg_sentence_length,
        }
    }
}

/// Output of one scoring call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoringResult {
    pub final_score: f64,
    pub components: ScoreComponents,
    pub errors: ErrorReport,
    pub statistics: ScoringStatistics,
}

/// Round to two decimals from the exact binary value, so 2.675 (stored just
/// below the tie) gives 2.67 and exact ties go to the even digit.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
