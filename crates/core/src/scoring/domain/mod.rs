pub mod clarity_scorer;
pub mod complexity_scorer;
pub mod error_detector;
pub mod error_report;
pub mod fluency_scorer;
pub mod grammar_rule;
pub mod scoring_result;
