/// Speaking rate treated as ideal for conversational English.
pub const IDEAL_WPM: f64 = 140.0;

/// Each pause costs `1 / PAUSE_PENALTY_DIVISOR` of the fluency score, up to `MAX_PAUSE_PENALTY`.
pub const PAUSE_PENALTY_DIVISOR: f64 = 10.0;
pub const MAX_PAUSE_PENALTY: f64 = 0.5;

/// Sentences at or above this many words saturate at complexity 1.0.
pub const SATURATING_SENTENCE_WORDS: f64 = 30.0;

/// Error rate (errors per word) at which the grammar component reaches zero.
pub const ZERO_SCORE_ERROR_RATE: f64 = 0.1;

/// Distinct POS tags treated as maximal structural variety.
pub const MAX_POS_VARIETY: f64 = 15.0;

/// Marker-word occurrences at which the clarity pattern score saturates.
pub const SATURATING_MARKER_WORDS: f64 = 20.0;

pub const CLARITY_MARKER_WORDS: &[&str] = &[
    "the", "a", "is", "are", "and", "but", "or", "if", "when", "because",
];

/// English function words dropped from `ProcessedText::words_filtered` when enabled.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

pub const DEFAULT_SAMPLE_RATE: u32 = 16000;
pub const DEFAULT_SILENCE_THRESHOLD_DB: f64 = 40.0;
pub const DEFAULT_FRAME_LENGTH: usize = 2048;
pub const DEFAULT_HOP_LENGTH: usize = 512;

pub const CONFIG_DIR_NAME: &str = "grammar-score";
pub const CONFIG_FILE_NAME: &str = "config.json";
