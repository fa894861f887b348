use std::collections::BTreeMap;
use std::time::Instant;

/// Cross-cutting observer for scoring pipeline events.
///
/// Keeps the use case free of any particular output mechanism; the CLI logs
/// through `log`, tests discard everything.
pub trait ScoringLogger: Send {
    /// Record how long a named stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time measurement (e.g. word count, pause count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullScoringLogger;

impl ScoringLogger for NullScoringLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Logger that forwards messages to the `log` crate and keeps stage
/// timings and metrics for a closing summary.
pub struct LogScoringLogger {
    timings: BTreeMap<String, Vec<f64>>,
    metrics: BTreeMap<String, Vec<f64>>,
    start_time: Instant,
}

impl LogScoringLogger {
    pub fn new() -> Self {
        Self {
            timings: BTreeMap::new(),
            metrics: BTreeMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Scoring summary ({elapsed_ms:.1}ms total):")];

        for (stage, durations) in &self.timings {
            let total_ms: f64 = durations.iter().sum();
            lines.push(format!(
                "  {stage:12}: total {total_ms:7.2}ms over {} run(s)",
                durations.len()
            ));
        }

        for (name, values) in &self.metrics {
            let avg = values.iter().sum::<f64>() / values.len() as f64;
            lines.push(format!("  {name}: avg {avg:.1}"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }
}

impl Default for LogScoringLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringLogger for LogScoringLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.2}ms");
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}
