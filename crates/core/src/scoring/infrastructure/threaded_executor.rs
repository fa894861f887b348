use std::thread;

use crate::scoring::component_executor::{ComponentExecutor, ComponentInput, ComponentOutput};
use crate::scoring::domain::clarity_scorer::ClarityScorer;
use crate::scoring::domain::complexity_scorer::ComplexityScorer;
use crate::scoring::domain::error_detector::ErrorDetector;
use crate::scoring::domain::error_report::ErrorReport;
use crate::scoring::domain::fluency_scorer::FluencyScorer;
use crate::text::domain::word_tokenizer::WordTokenizer;

enum ComponentMessage {
    Grammar(f64, ErrorReport),
    Complexity(f64),
    Fluency(f64),
    Clarity(f64),
}

/// Evaluates each sub-scorer on its own scoped thread.
///
/// Layout: `grammar | complexity | fluency | clarity → collector`
///
/// Worth it only for long transcripts; for short ones thread startup dominates.
pub struct ThreadedExecutor;

impl ComponentExecutor for ThreadedExecutor {
    fn evaluate(
        &self,
        detector: &ErrorDetector,
        tokenizer: &dyn WordTokenizer,
        input: &ComponentInput<'_>,
    ) -> ComponentOutput {
        let (tx, rx) = crossbeam_channel::bounded::<ComponentMessage>(4);

        thread::scope(|scope| {
            let grammar_tx = tx.clone();
            scope.spawn(move || {
                let errors = detector.detect(input.text);
                let grammar = ErrorDetector::grammar_component(&errors, input.total_words);
                let _ = grammar_tx.send(ComponentMessage::Grammar(grammar, errors));
            });

            let complexity_tx = tx.clone();
            scope.spawn(move || {
                let score = ComplexityScorer::score(input.sentences, tokenizer);
                let _ = complexity_tx.send(ComponentMessage::Complexity(score));
            });

            let fluency_tx = tx.clone();
            scope.spawn(move || {
                let score =
                    FluencyScorer::score(input.text, input.duration_seconds, input.pause_count);
                let _ = fluency_tx.send(ComponentMessage::Fluency(score));
            });

            let clarity_tx = tx;
            scope.spawn(move || {
                let score = ClarityScorer::score(input.text, input.pos_tags);
                let _ = clarity_tx.send(ComponentMessage::Clarity(score));
            });
        });

        let mut output = ComponentOutput {
            grammar: 0.0,
            complexity: 0.0,
            fluency: 0.0,
            clarity: 0.0,
            errors: ErrorReport::default(),
        };
        for message in rx.try_iter() {
            match message {
                ComponentMessage::Grammar(score, errors) => {
                    output.grammar = score;
                    output.errors = errors;
                }
                ComponentMessage::Complexity(score) => output.complexity = score,
                ComponentMessage::Fluency(score) => output.fluency = score,
                ComponentMessage::Clarity(score) => output.clarity = score,
            }
        }
        output
    }
}
