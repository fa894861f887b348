use serde::Serialize;

use crate::scoring::domain::error_report::ErrorReport;
use crate::scoring::domain::scoring_result::{
    round2, ScoreComponents, ScoringResult, ScoringStatistics,
};

const RULE: &str = "============================================================";

/// Scoring outcome for one sample, with the upstream measurements alongside.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleReport {
    pub audio_file: Option<String>,
    pub transcript: String,
    pub audio_duration: f64,
    pub pauses_detected: u32,
    pub final_score: f64,
    pub components: ScoreComponents,
    pub errors: ErrorReport,
    pub statistics: ScoringStatistics,
}

impl SampleReport {
    pub fn new(
        audio_file: Option<String>,
        transcript: String,
        audio_duration: f64,
        pauses_detected: u32,
        result: ScoringResult,
    ) -> Self {
        Self {
            audio_file,
            transcript,
            audio_duration: round2(audio_duration),
            pauses_detected,
            final_score: result.final_score,
            components: result.components,
            errors: result.errors,
            statistics: result.statistics,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable summary, scores shown out of `max_score`.
    pub fn summary_string(&self, max_score: f64) -> String {
        let c = &self.components;
        let s = &self.statistics;
        let lines = [
            RULE.to_string(),
            "GRAMMAR SCORING RESULTS".to_string(),
            RULE.to_string(),
            format!("Audio File: {}", self.audio_file.as_deref().unwrap_or("N/A")),
            format!("Transcript: {}", self.transcript),
            format!(
                "Duration: {:.2}s, Pauses: {}",
                self.audio_duration, self.pauses_detected
            ),
            String::new(),
            format!("Final Grammar Score: {}/{}", self.final_score, max_score),
            String::new(),
            "Component Scores:".to_string(),
            format!("  - Grammar: {}/100", c.grammar),
            format!("  - Complexity: {}/100", c.complexity),
            format!("  - Fluency: {}/100", c.fluency),
            format!("  - Clarity: {}/100", c.clarity),
            String::new(),
            "Error Analysis:".to_string(),
            format!("  - Total Errors Found: {}", self.errors.total_errors),
            String::new(),
            "Text Statistics:".to_string(),
            format!("  - Total Words: {}", s.total_words),
            format!("  - Total Sentences: {}", s.total_sentences),
            format!("  - Avg Sentence Length: {:.2}", s.avg_sentence_length),
            RULE.to_string(),
        ];
        lines.join("\n")
    }
}
