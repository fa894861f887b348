use super::error_report::{ErrorPosition, ErrorReport};
use super::grammar_rule::{default_rules, GrammarRulePattern};
use crate::shared::constants::ZERO_SCORE_ERROR_RATE;

/// Scans raw text for grammar rule matches.
#[derive(Debug, Clone)]
pub struct ErrorDetector {
    rules: Vec<GrammarRulePattern>,
}

impl ErrorDetector {
    pub fn new() -> Self {
        Self::with_rules(default_rules().to_vec())
    }

    pub fn with_rules(rules: Vec<GrammarRulePattern>) -> Self {
        Self { rules }
    }

    pub fn detect(&self, text: &str) -> ErrorReport {
        let mut report = ErrorReport::default();

        for rule in &self.rules {
            let mut offsets = CharOffsets::new(text);
            let before = report.error_positions.len();

            for m in rule.pattern.find_iter(text) {
                report.error_positions.push(ErrorPosition {
                    rule: rule.name.to_string(),
                    position: offsets.char_index(m.start()),
                    text: m.as_str().to_string(),
                });
            }

            let count = report.error_positions.len() - before;
            if count > 0 {
                log::debug!("rule {}: {count} match(es)", rule.name);
                report.error_types.insert(rule.name.to_string(), count);
                report.total_errors += count;
            }
        }

        report
    }

    /// 1.0 with no errors, falling linearly to 0.0 at the zero-score error rate.
    /// 0.0 when there are no words.
    pub fn grammar_component(report: &ErrorReport, total_words: usize) -> f64 {
        if total_words == 0 {
            return 0.0;
        }
        let error_rate = report.total_errors as f64 / total_words as f64;
        (1.0 - error_rate / ZERO_SCORE_ERROR_RATE).clamp(0.0, 1.0)
    }
}

impl Default for ErrorDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts ascending byte offsets into character offsets without rescanning from the start.
struct CharOffsets<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharOffsets<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_index(&mut self, byte_offset: usize) -> usize {
        self.chars += self.text[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        self.chars
    }
}
