use std::borrow::Cow;

/// A segment of decoded audio: interleaved PCM samples normalized to [-1.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }

    /// Channel-averaged samples; borrows when already mono.
    pub fn mono_samples(&self) -> Cow<'_, [f32]> {
        let channels = self.channels.max(1) as usize;
        if channels == 1 {
            return Cow::Borrowed(&self.samples[..]);
        }
        Cow::Owned(
            self.samples
                .chunks(channels)
                .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
                .collect(),
        )
    }

    /// Scale so the loudest sample has magnitude 1.0. Silent audio is left as is.
    pub fn normalize(&mut self) {
        let peak = self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        if peak > 0.0 {
            for sample in &mut self.samples {
                *sample /= peak;
            }
        }
    }

    /// Mean power of each analysis frame of the mono signal.
    ///
    /// Frames start every `hop_length` samples; the last frames may be shorter
    /// than `frame_length`.
    pub fn frame_powers(&self, frame_length: usize, hop_length: usize) -> Vec<f64> {
        let mono = self.mono_samples();
        let hop = hop_length.max(1);
        let frame_length = frame_length.max(1);

        (0..mono.len())
            .step_by(hop)
            .map(|start| {
                let end = (start + frame_length).min(mono.len());
                let frame = &mono[start..end];
                frame.iter().map(|s| (*s as f64).powi(2)).sum::<f64>() / frame.len() as f64
            })
            .collect()
    }

    /// Drop leading and trailing frames quieter than `top_db` below the loudest frame.
    ///
    /// Fully silent audio trims to nothing.
    pub fn trim_silence(&mut self, top_db: f64, frame_length: usize, hop_length: usize) {
        let powers = self.frame_powers(frame_length, hop_length);
        let reference = max_power(&powers);
        let loud = |p: &f64| power_to_db(*p, reference) > -top_db;

        let (first, last) = match (powers.iter().position(&loud), powers.iter().rposition(&loud)) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                self.samples.clear();
                return;
            }
        };

        let channels = self.channels.max(1) as usize;
        let mono_len = self.samples.len() / channels;
        let hop = hop_length.max(1);
        let start = first * hop;
        let end = ((last + 1) * hop).min(mono_len);

        self.samples.truncate(end * channels);
        self.samples.drain(..start * channels);
    }
}

/// Power relative to `reference` in decibels; `-inf` for zero power.
pub fn power_to_db(power: f64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return f64::NEG_INFINITY;
    }
    10.0 * (power / reference).log10()
}

pub fn max_power(powers: &[f64]) -> f64 {
    powers.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_creates_segment_with_correct_fields() {
        let samples = vec![0.0f32; 16000];
        let seg = AudioSegment::new(samples.clone(), 16000, 1);
        assert_eq!(seg.samples(), &samples[..]);
        assert_eq!(seg.sample_rate(), 16000);
        assert_eq!(seg.channels(), 1);
    }

    #[test]
    fn test_duration_mono() {
        let seg = AudioSegment::new(vec![0.0; 48000], 16000, 1);
        assert_eq!(seg.duration(), 3.0);
    }

    #[test]
    fn test_duration_stereo() {
        let seg = AudioSegment::new(vec![0.0; 96000], 48000, 2);
        assert_eq!(seg.duration(), 1.0);
    }

    fn tone(seconds: f64, sample_rate: u32) -> Vec<f32> {
        let len = (seconds * sample_rate as f64) as usize;
        (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                (2.0 * std::f64::consts::PI * 440.0 * t).sin() as f32 * 0.5
            })
            .collect()
    }

    #[test]
    fn test_normalize_scales_peak_to_one() {
        let mut seg = AudioSegment::new(vec![0.1, -0.25, 0.2], 16000, 1);
        seg.normalize();
        assert_relative_eq!(seg.samples()[1], -1.0);
        assert_relative_eq!(seg.samples()[0], 0.4);
    }

    #[test]
    fn test_normalize_silent_audio_is_noop() {
        let mut seg = AudioSegment::new(vec![0.0; 10], 16000, 1);
        seg.normalize();
        assert!(seg.samples().iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_mono_samples_averages_channels() {
        let seg = AudioSegment::new(vec![1.0, 0.0, 0.5, 0.5], 16000, 2);
        assert_eq!(seg.mono_samples().as_ref(), &[0.5, 0.5]);
    }

    #[test]
    fn test_frame_powers_count_and_values() {
        let seg = AudioSegment::new(vec![1.0; 10], 16000, 1);
        let powers = seg.frame_powers(4, 2);
        assert_eq!(powers.len(), 5);
        assert!(powers.iter().all(|p| (*p - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_trim_silence_removes_leading_and_trailing_silence() {
        let mut samples = vec![0.0f32; 16000];
        samples.extend(tone(1.0, 16000));
        samples.extend(vec![0.0f32; 16000]);
        let mut seg = AudioSegment::new(samples, 16000, 1);

        seg.trim_silence(40.0, 2048, 512);

        // Kept audio is the tone plus less than one frame of padding on each side
        assert!(seg.duration() >= 1.0);
        assert!(seg.duration() < 1.0 + 2.0 * 2048.0 / 16000.0);
    }

    #[test]
    fn test_trim_silence_on_silent_audio_empties_segment() {
        let mut seg = AudioSegment::new(vec![0.0; 16000], 16000, 1);
        seg.trim_silence(40.0, 2048, 512);
        assert!(seg.samples().is_empty());
        assert_eq!(seg.duration(), 0.0);
    }

    #[test]
    fn test_trim_silence_keeps_stereo_interleaving() {
        let mut samples = vec![0.0f32; 2 * 4096];
        samples.extend(tone(0.5, 16000).iter().flat_map(|s| [*s, *s]));
        let mut seg = AudioSegment::new(samples, 16000, 2);
        seg.trim_silence(40.0, 1024, 256);
        assert_eq!(seg.samples().len() % 2, 0);
        assert!(seg.duration() >= 0.5);
    }

    #[test]
    fn test_power_to_db() {
        assert_relative_eq!(power_to_db(1.0, 1.0), 0.0);
        assert_relative_eq!(power_to_db(0.01, 1.0), -20.0, epsilon = 1e-9);
        assert_eq!(power_to_db(0.0, 1.0), f64::NEG_INFINITY);
        assert_eq!(power_to_db(1.0, 0.0), f64::NEG_INFINITY);
    }
}
