#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptWord {
    pub word: String,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f32,
}

impl TranscriptWord {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Plain transcript text: trimmed words joined by single spaces, blanks skipped.
pub fn transcript_text(words: &[TranscriptWord]) -> String {
    words
        .iter()
        .map(|w| w.word.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
