pub mod audio_segment;
pub mod pause_detector;
pub mod speech_recognizer;
pub mod transcript;
