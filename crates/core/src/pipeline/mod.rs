pub mod sample_report;
pub mod score_sample_use_case;
pub mod scoring_logger;
pub mod speech_sample;
