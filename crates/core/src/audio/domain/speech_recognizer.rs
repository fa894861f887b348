use super::audio_segment::AudioSegment;
use super::transcript::TranscriptWord;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run an ASR engine on mono audio at the configured sample
/// rate and return recognized words in spoken order.
pub trait SpeechRecognizer: Send + Sync {
    fn transcribe(
        &self,
        audio: &AudioSegment,
    ) -> Result<Vec<TranscriptWord>, Box<dyn std::error::Error>>;
}
