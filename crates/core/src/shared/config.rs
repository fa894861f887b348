use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FRAME_LENGTH, DEFAULT_HOP_LENGTH,
    DEFAULT_SAMPLE_RATE, DEFAULT_SILENCE_THRESHOLD_DB,
};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weight '{name}' must be a non-negative finite number, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
    #[error("weights must sum to 1.0, got {0}")]
    WeightSum(f64),
    #[error("max_score ({max}) must be greater than min_score ({min})")]
    ScoreRange { min: f64, max: f64 },
}

/// Relative importance of each component in the final score.
///
/// Weights are expected to be non-negative and to sum to 1.0 so the final
/// score lands in `[0, max_score]`. The engine does not normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub grammar_errors: f64,
    pub sentence_complexity: f64,
    pub fluency: f64,
    pub clarity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            grammar_errors: 0.4,
            sentence_complexity: 0.3,
            fluency: 0.2,
            clarity: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.grammar_errors + self.sentence_complexity + self.fluency + self.clarity
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("grammar_errors", self.grammar_errors),
            ("sentence_complexity", self.sentence_complexity),
            ("fluency", self.fluency),
            ("clarity", self.clarity),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate: u32,
    pub normalize: bool,
    pub remove_silence: bool,
    /// Frames this many dB below the loudest frame count as silence.
    pub silence_threshold_db: f64,
    pub frame_length: usize,
    pub hop_length: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            normalize: true,
            remove_silence: true,
            silence_threshold_db: DEFAULT_SILENCE_THRESHOLD_DB,
            frame_length: DEFAULT_FRAME_LENGTH,
            hop_length: DEFAULT_HOP_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub lowercase: bool,
    pub remove_stopwords: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_stopwords: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub max_score: f64,
    pub min_score: f64,
    pub audio: AudioConfig,
    pub text: TextConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            max_score: 100.0,
            min_score: 0.0,
            audio: AudioConfig::default(),
            text: TextConfig::default(),
        }
    }
}

impl ScoringConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Per-user config file location, e.g. `~/.config/grammar-score/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Strict checks for callers that want them. Scoring never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        if self.max_score <= self.min_score {
            return Err(ConfigError::ScoreRange {
                min: self.min_score,
                max: self.max_score,
            });
        }
        Ok(())
    }
}
