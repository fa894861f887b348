use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::text::domain::pos_tag::PosTag;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("failed to read sample {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid sample JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duration must be a non-negative number of seconds, got {0}")]
    Duration(f64),
}

/// Upstream measurements for one spoken sample: what the ASR and audio
/// collaborators produced, ready to be scored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SpeechSample {
    #[serde(default)]
    pub audio_file: Option<String>,
    pub transcript: String,
    pub duration_seconds: f64,
    #[serde(default)]
    pub pause_count: u32,
    /// Tags from an external tagger; derived locally when absent.
    #[serde(default)]
    pub pos_tags: Option<Vec<PosTag>>,
}

impl SpeechSample {
    pub fn load(path: &Path) -> Result<Self, SampleError> {
        let json = fs::read_to_string(path).map_err(|e| SampleError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let sample: Self = serde_json::from_str(&json).map_err(|e| SampleError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        sample.validate()?;
        Ok(sample)
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(SampleError::Duration(self.duration_seconds));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_sample(json: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), json).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_sample() {
        let file = write_sample(r#"{"transcript": "Hello there.", "duration_seconds": 1.5}"#);
        let sample = SpeechSample::load(file.path()).unwrap();
        assert_eq!(sample.transcript, "Hello there.");
        assert_eq!(sample.pause_count, 0);
        assert!(sample.pos_tags.is_none());
        assert!(sample.audio_file.is_none());
    }

    #[test]
    fn test_load_full_sample() {
        let file = write_sample(
            r#"{
                "audio_file": "clip.wav",
                "transcript": "Dogs bark.",
                "duration_seconds": 2.0,
                "pause_count": 3,
                "pos_tags": [{"word": "Dogs", "tag": "NNS"}, {"word": "bark", "tag": "VBP"}]
            }"#,
        );
        let sample = SpeechSample::load(file.path()).unwrap();
        assert_eq!(sample.audio_file.as_deref(), Some("clip.wav"));
        assert_eq!(sample.pause_count, 3);
        assert_eq!(sample.pos_tags.unwrap()[1], PosTag::new("bark", "VBP"));
    }

    #[test]
    fn test_missing_transcript_is_parse_error() {
        let file = write_sample(r#"{"duration_seconds": 2.0}"#);
        let err = SpeechSample::load(file.path()).unwrap_err();
        assert!(matches!(err, SampleError::Parse { .. }));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let file = write_sample(r#"{"transcript": "x", "duration_seconds": -1.0}"#);
        let err = SpeechSample::load(file.path()).unwrap_err();
        assert!(matches!(err, SampleError::Duration(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpeechSample::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SampleError::Io { .. }));
    }
}
