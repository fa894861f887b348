use crate::shared::constants::{IDEAL_WPM, MAX_PAUSE_PENALTY, PAUSE_PENALTY_DIVISOR};

/// Speech pacing and disfluency from speaking rate and pause count.
pub struct FluencyScorer;

impl FluencyScorer {
    /// Returns a value in [0, 1]; 0.0 when `duration_seconds` is zero.
    ///
    /// Words are whitespace-delimited tokens of `text`.
    pub fn score(text: &str, duration_seconds: f64, pause_count: u32) -> f64 {
        if duration_seconds == 0.0 {
            return 0.0;
        }

        let word_count = text.split_whitespace().count() as f64;
        let wpm = word_count / duration_seconds * 60.0;
        let wpm_score = Self::rate_score(wpm);
        let penalty = Self::pause_penalty(pause_count);

        (wpm_score * (1.0 - penalty)).clamp(0.0, 1.0)
    }

    /// 1.0 at the ideal rate, falling linearly to 0.0 at 0 or twice the ideal rate.
    pub fn rate_score(wpm: f64) -> f64 {
        (1.0 - (wpm - IDEAL_WPM).abs() / IDEAL_WPM).clamp(0.0, 1.0)
    }

    pub fn pause_penalty(pause_count: u32) -> f64 {
        (pause_count as f64 / PAUSE_PENALTY_DIVISOR).min(MAX_PAUSE_PENALTY)
    }
}
