use std::sync::LazyLock;

use regex::Regex;

/// A named surface pattern that flags a potential grammar issue.
///
/// These are heuristics over raw text, not a grammar: false positives and
/// negatives are expected.
#[derive(Debug, Clone)]
pub struct GrammarRulePattern {
    pub name: &'static str,
    pub pattern: Regex,
    pub description: &'static str,
}

impl GrammarRulePattern {
    /// Compile `pattern` case-insensitively.
    pub fn new(
        name: &'static str,
        pattern: &str,
        description: &'static str,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(&format!("(?i){pattern}"))?,
            description,
        })
    }
}

const RULE_SOURCES: &[(&str, &str, &str)] = &[
    (
        "subject_verb_agreement",
        r"\b(is|are|was|were|be|been|being)\b",
        "Subject-verb agreement issues",
    ),
    (
        "article_usage",
        r"\b(a|an|the)\s+\w+",
        "Article usage issues",
    ),
    (
        "tense_consistency",
        r"\b(is|am|are|was|were|will|would|should|could|have|has|had)\b",
        "Tense consistency issues",
    ),
    (
        "pronoun_agreement",
        r"\b(he|she|it|they|we|you|I)\s+\w+",
        "Pronoun agreement issues",
    ),
];

static DEFAULT_RULES: LazyLock<Vec<GrammarRulePattern>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .map(|&(name, pattern, description)| {
            GrammarRulePattern::new(name, pattern, description).expect("valid regex")
        })
        .collect()
});

/// Process-wide rule registry, compiled once and never mutated. Scan order is fixed.
pub fn default_rules() -> &'static [GrammarRulePattern] {
    &DEFAULT_RULES
}
