use std::collections::BTreeMap;

use serde::Serialize;

/// One rule match: where it starts (in characters) and what it matched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorPosition {
    pub rule: String,
    pub position: usize,
    pub text: String,
}

/// Outcome of error detection.
///
/// `error_types` holds only rules with at least one match. `error_positions`
/// is in rule scan order, then match order within each rule; it is not
/// sorted by position.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ErrorReport {
    pub total_errors: usize,
    pub error_types: BTreeMap<String, usize>,
    pub error_positions: Vec<ErrorPosition>,
}

impl ErrorReport {
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }

    pub fn count_for(&self, rule: &str) -> usize {
        self.error_types.get(rule).copied().unwrap_or(0)
    }
}
