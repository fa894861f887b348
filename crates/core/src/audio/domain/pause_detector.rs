use super::audio_segment::{max_power, power_to_db, AudioSegment};
use crate::shared::config::AudioConfig;

/// Counts pauses as transitions from sound into silence.
///
/// A frame is silent when its power is more than `threshold_db` below the
/// loudest frame of the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PauseDetector {
    threshold_db: f64,
    frame_length: usize,
    hop_length: usize,
}

impl PauseDetector {
    pub fn new(threshold_db: f64, frame_length: usize, hop_length: usize) -> Self {
        Self {
            threshold_db: threshold_db.abs(),
            frame_length,
            hop_length,
        }
    }

    pub fn from_config(config: &AudioConfig) -> Self {
        Self::new(
            config.silence_threshold_db,
            config.frame_length,
            config.hop_length,
        )
    }

    pub fn count(&self, audio: &AudioSegment) -> u32 {
        let powers = audio.frame_powers(self.frame_length, self.hop_length);
        let reference = max_power(&powers);
        if reference <= 0.0 {
            return 0;
        }

        let silent: Vec<bool> = powers
            .iter()
            .map(|p| power_to_db(*p, reference) < -self.threshold_db)
            .collect();

        silent
            .windows(2)
            .filter(|pair| !pair[0] && pair[1])
            .count() as u32
    }
}
