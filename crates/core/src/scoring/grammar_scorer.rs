use super::component_executor::{ComponentExecutor, ComponentInput, SequentialExecutor};
use super::domain::error_detector::ErrorDetector;
use super::domain::scoring_result::{round2, ScoreComponents, ScoringResult, ScoringStatistics};
use crate::shared::config::{ScoringConfig, ScoringWeights};
use crate::text::domain::pos_tag::PosTag;
use crate::text::domain::sentence_splitter::SentenceSplitter;
use crate::text::domain::word_tokenizer::WordTokenizer;

/// Combines the four component scores into one weighted grammar score.
///
/// Stateless between calls: the rule registry and configuration are fixed
/// at construction, so one scorer can serve any number of threads.
///
/// Preconditions (not checked here, see [`ScoringConfig::validate`]):
/// weights are non-negative and sum to 1.0. Under those, `final_score`
/// falls in `[0, max_score]`; no clamp is applied beyond that.
pub struct GrammarScorer {
    config: ScoringConfig,
    detector: ErrorDetector,
    splitter: Box<dyn SentenceSplitter>,
    tokenizer: Box<dyn WordTokenizer>,
    executor: Box<dyn ComponentExecutor>,
}

impl GrammarScorer {
    pub fn new(
        config: ScoringConfig,
        splitter: Box<dyn SentenceSplitter>,
        tokenizer: Box<dyn WordTokenizer>,
    ) -> Self {
        Self {
            config,
            detector: ErrorDetector::new(),
            splitter,
            tokenizer,
            executor: Box::new(SequentialExecutor),
        }
    }

    pub fn with_executor(mut self, executor: Box<dyn ComponentExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one transcript.
    ///
    /// `pos_tags` feed the clarity component only; error detection works on
    /// the raw text and ignores them.
    pub fn score(
        &self,
        text: &str,
        duration_seconds: f64,
        pause_count: u32,
        pos_tags: &[PosTag],
    ) -> ScoringResult {
        let sentences = self.splitter.split(text);
        let total_words = self.tokenizer.tokenize(text).len();

        let input = ComponentInput {
            text,
            sentences: &sentences,
            total_words,
            duration_seconds,
            pause_count,
            pos_tags,
        };
        let output = self
            .executor
            .evaluate(&self.detector, self.tokenizer.as_ref(), &input);

        log::debug!(
            "components: grammar={:.3} complexity={:.3} fluency={:.3} clarity={:.3}",
            output.grammar,
            output.complexity,
            output.fluency,
            output.clarity
        );

        let final_score = weighted_sum(
            &self.config.weights,
            output.grammar,
            output.complexity,
            output.fluency,
            output.clarity,
        ) * self.config.max_score;

        ScoringResult {
            final_score: round2(final_score),
            components: ScoreComponents {
                grammar: round2(output.grammar * 100.0),
                complexity: round2(output.complexity * 100.0),
                fluency: round2(output.fluency * 100.0),
                clarity: round2(output.clarity * 100.0),
            },
            errors: output.errors,
            statistics: ScoringStatistics::new(total_words, sentences.len()),
        }
    }
}

fn weighted_sum(
    weights: &ScoringWeights,
    grammar: f64,
    complexity: f64,
    fluency: f64,
    clarity: f64,
) -> f64 {
    grammar * weights.grammar_errors
        + complexity * weights.sentence_complexity
        + fluency * weights.fluency
        + clarity * weights.clarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::infrastructure::threaded_executor::ThreadedExecutor;
    use approx::assert_relative_eq;

    // ─── Stubs ───

    struct StubSplitter;

    impl SentenceSplitter for StubSplitter {
        fn split(&self, text: &str) -> Vec<String> {
            text.split_inclusive('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        }
    }

    struct StubTokenizer;

    impl WordTokenizer for StubTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace()
                .map(|w| w.trim_end_matches('.').to_string())
                .filter(|w| !w.is_empty())
                .collect()
        }
    }

    const SCENARIO: &str = "The cat is sleeping. The dog runs fast in the park today.";

    fn scorer(config: ScoringConfig) -> GrammarScorer {
        GrammarScorer::new(config, Box::new(StubSplitter), Box::new(StubTokenizer))
    }

    fn five_tags() -> Vec<PosTag> {
        ["DT", "NN", "VBZ", "VBG", "RB"]
            .iter()
            .map(|t| PosTag::new("w", *t))
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        let result = scorer(ScoringConfig::default()).score(SCENARIO, 10.0, 1, &five_tags());

        assert_eq!(result.statistics.total_sentences, 2);
        assert_eq!(result.statistics.total_words, 12);
        assert_relative_eq!(result.statistics.avg_sentence_length, 6.0);

        // 5 rule matches over 12 words is far beyond the 0.1 errors/word threshold
        assert_eq!(result.errors.total_errors, 5);
        assert_relative_eq!(result.components.grammar, 0.0);

        // sentences of 4 and 8 words
        assert_relative_eq!(result.components.complexity, 20.0);
        // 72 wpm, one pause
        assert_relative_eq!(result.components.fluency, 46.29);
        // 5 distinct tags, 4 marker words
        assert_relative_eq!(result.components.clarity, 26.67);

        // 0.3 * 0.2 + 0.2 * 0.462857 + 0.1 * 0.266667
        assert_relative_eq!(result.final_score, 17.92);
    }

    #[test]
    fn test_empty_text() {
        let result = scorer(ScoringConfig::default()).score("", 10.0, 0, &[]);
        assert_eq!(result.statistics.total_words, 0);
        assert_eq!(result.statistics.total_sentences, 0);
        assert_relative_eq!(result.statistics.avg_sentence_length, 0.0);
        assert_relative_eq!(result.components.grammar, 0.0);
        assert_relative_eq!(result.components.complexity, 0.0);
        assert_relative_eq!(result.components.fluency, 0.0);
        assert_relative_eq!(result.components.clarity, 0.0);
        assert_relative_eq!(result.final_score, 0.0);
        assert!(result.errors.is_clean());
    }

    #[test]
    fn test_zero_duration_zeroes_fluency_only() {
        let result = scorer(ScoringConfig::default()).score(SCENARIO, 0.0, 0, &five_tags());
        assert_relative_eq!(result.components.fluency, 0.0);
        assert!(result.components.complexity > 0.0);
        assert!(result.components.clarity > 0.0);
    }

    #[test]
    fn test_thirty_word_sentence_saturates_complexity() {
        let text = format!("{}.", vec!["dogs"; 30].join(" "));
        let result = scorer(ScoringConfig::default()).score(&text, 10.0, 0, &[]);
        assert_eq!(result.statistics.total_sentences, 1);
        assert_relative_eq!(result.components.complexity, 100.0);
    }

    #[test]
    fn test_clean_text_scores_full_grammar() {
        let result = scorer(ScoringConfig::default()).score("Dogs run fast.", 1.0, 0, &[]);
        assert!(result.errors.is_clean());
        assert_relative_eq!(result.components.grammar, 100.0);
    }

    #[test]
    fn test_final_score_scales_with_max_score() {
        let config = ScoringConfig {
            max_score: 10.0,
            ..ScoringConfig::default()
        };
        let result = scorer(config).score(SCENARIO, 10.0, 1, &five_tags());
        assert_relative_eq!(result.final_score, 1.79);
    }

    #[test]
    fn test_single_weight_selects_component() {
        let config = ScoringConfig {
            weights: ScoringWeights {
                grammar_errors: 0.0,
                sentence_complexity: 1.0,
                fluency: 0.0,
                clarity: 0.0,
            },
            ..ScoringConfig::default()
        };
        let result = scorer(config).score(SCENARIO, 10.0, 1, &five_tags());
        assert_relative_eq!(result.final_score, result.components.complexity);
    }

    #[test]
    fn test_malformed_weights_are_not_clamped() {
        let config = ScoringConfig {
            weights: ScoringWeights {
                grammar_errors: 2.0,
                sentence_complexity: 0.0,
                fluency: 0.0,
                clarity: 0.0,
            },
            ..ScoringConfig::default()
        };
        let result = scorer(config).score("Dogs run fast.", 1.0, 0, &[]);
        assert_relative_eq!(result.final_score, 200.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let s = scorer(ScoringConfig::default());
        let first = s.score(SCENARIO, 10.0, 1, &five_tags());
        let second = s.score(SCENARIO, 10.0, 1, &five_tags());
        assert_eq!(first, second);
    }

    #[test]
    fn test_threaded_executor_gives_identical_result() {
        let sequential = scorer(ScoringConfig::default());
        let threaded = scorer(ScoringConfig::default()).with_executor(Box::new(ThreadedExecutor));
        assert_eq!(
            sequential.score(SCENARIO, 10.0, 1, &five_tags()),
            threaded.score(SCENARIO, 10.0, 1, &five_tags())
        );
    }

    #[test]
    fn test_components_and_final_score_stay_in_range() {
        let s = scorer(ScoringConfig::default());
        let texts = [
            "",
            "Yes.",
            "I think that they are going to the market because it is late.",
            "Running quickly, the athletes crossed the line. Nobody cheered.",
        ];
        for text in texts {
            for (duration, pauses) in [(0.0, 0), (1.0, 3), (30.0, 12)] {
                let r = s.score(text, duration, pauses, &five_tags());
                for c in [
                    r.components.grammar,
                    r.components.complexity,
                    r.components.fluency,
                    r.components.clarity,
                ] {
                    assert!((0.0..=100.0).contains(&c), "component {c} out of range");
                }
                assert!((0.0..=100.0).contains(&r.final_score));
            }
        }
    }

    #[test]
    fn test_scorer_is_shareable_across_threads() {
        let s = std::sync::Arc::new(scorer(ScoringConfig::default()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = s.clone();
                std::thread::spawn(move || s.score(SCENARIO, 10.0, 1, &five_tags()))
            })
            .collect();
        let expected = s.score(SCENARIO, 10.0, 1, &five_tags());
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
