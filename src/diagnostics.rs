//! Per-line diagnostics reporting.
//!
//! The transformer reports row-level anomalies through an injected
//! [`DiagnosticSink`] rather than a process-wide logger, so tests can
//! assert on exactly what was emitted.

use tracing::{error, warn};

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Structural issue, e.g. a row with too few columns.
    Warning,
    /// Validation failure, e.g. a non-numeric coordinate.
    Error,
}

/// Receiver for per-line diagnostics emitted during a transform pass.
///
/// `line_number` is 1-based and counts from the first data line; a skipped
/// header is never numbered, while empty lines still advance the counter.
pub trait DiagnosticSink {
    fn warning(&mut self, line_number: u64, message: &str);
    fn error(&mut self, line_number: u64, message: &str);
}

/// Forwards diagnostics to the `tracing` log stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&mut self, line_number: u64, message: &str) {
        warn!(line = line_number, "{message}");
    }

    fn error(&mut self, line_number: u64, message: &str) {
        error!(line = line_number, "{message}");
    }
}

/// Records diagnostics in memory for later assertions.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub entries: Vec<(Severity, u64, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line numbers that produced a diagnostic of the given severity.
    pub fn lines_with(&self, severity: Severity) -> Vec<u64> {
        self.entries
            .iter()
            .filter(|(s, _, _)| *s == severity)
            .map(|(_, line, _)| *line)
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn warning(&mut self, line_number: u64, message: &str) {
        self.entries
            .push((Severity::Warning, line_number, message.to_string()));
    }

    fn error(&mut self, line_number: u64, message: &str) {
        self.entries
            .push((Severity::Error, line_number, message.to_string()));
    }
}
