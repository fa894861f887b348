use super::domain::clarity_scorer::ClarityScorer;
use super::domain::complexity_scorer::ComplexityScorer;
use super::domain::error_detector::ErrorDetector;
use super::domain::error_report::ErrorReport;
use super::domain::fluency_scorer::FluencyScorer;
use crate::text::domain::pos_tag::PosTag;
use crate::text::domain::word_tokenizer::WordTokenizer;

/// Everything the sub-scorers read for one scoring call.
pub struct ComponentInput<'a> {
    pub text: &'a str,
    pub sentences: &'a [String],
    pub total_words: usize,
    pub duration_seconds: f64,
    pub pause_count: u32,
    pub pos_tags: &'a [PosTag],
}

/// Unscaled component scores, each in [0, 1], plus the detected errors.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentOutput {
    pub grammar: f64,
    pub complexity: f64,
    pub fluency: f64,
    pub clarity: f64,
    pub errors: ErrorReport,
}

/// Abstracts how the independent sub-scorers are evaluated.
///
/// The sub-scorers share no state, so every implementation must produce the
/// same output for the same input.
pub trait ComponentExecutor: Send + Sync {
    fn evaluate(
        &self,
        detector: &ErrorDetector,
        tokenizer: &dyn WordTokenizer,
        input: &ComponentInput<'_>,
    ) -> ComponentOutput;
}

/// Evaluates each sub-scorer in turn on the calling thread.
pub struct SequentialExecutor;

impl ComponentExecutor for SequentialExecutor {
    fn evaluate(
        &self,
        detector: &ErrorDetector,
        tokenizer: &dyn WordTokenizer,
        input: &ComponentInput<'_>,
    ) -> ComponentOutput {
        let errors = detector.detect(input.text);
        ComponentOutput {
            grammar: ErrorDetector::grammar_component(&errors, input.total_words),
            complexity: ComplexityScorer::score(input.sentences, tokenizer),
            fluency: FluencyScorer::score(input.text, input.duration_seconds, input.pause_count),
            clarity: ClarityScorer::score(input.text, input.pos_tags),
            errors,
        }
    }
}
