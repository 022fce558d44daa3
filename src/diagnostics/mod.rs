//! Diagnostics for layout inputs and results
//!
//! Non-fatal findings about skylines and column sequences. Checks never
//! abort layout; callers decide whether to log, display or ignore them.

pub mod columns;
pub mod skylines;

use serde::{Deserialize, Serialize};

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// A finding attached to an element of a sequence
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DiagnosticMark {
    /// Index of the building or column concerned
    pub index: usize,
    /// Number of consecutive elements concerned (default 1)
    pub len: usize,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "skyline_gap", "column_bad_width")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    pub fn new(
        index: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            index,
            len: 1,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create with custom length (for range highlights)
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Forward the mark to the logger at a matching level
    pub fn log(&self) {
        match self.severity {
            DiagnosticSeverity::Error => log::error!("[{}] #{}: {}", self.kind, self.index, self.message),
            DiagnosticSeverity::Warning => log::warn!("[{}] #{}: {}", self.kind, self.index, self.message),
            DiagnosticSeverity::Info => log::info!("[{}] #{}: {}", self.kind, self.index, self.message),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Diagnostics {
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        self.marks.extend(marks);
    }

    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_mark_creation() {
        let mark = DiagnosticMark::new(5, DiagnosticSeverity::Error, "test_error", "Test error message")
            .with_len(3);

        assert_eq!(mark.index, 5);
        assert_eq!(mark.len, 3);
        assert_eq!(mark.severity, DiagnosticSeverity::Error);
        assert_eq!(mark.kind, "test_error");
    }

    #[test]
    fn test_diagnostics_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());

        diags.add(DiagnosticMark::new(0, DiagnosticSeverity::Warning, "warn", "Warning"));
        assert!(!diags.has_errors());

        diags.add(DiagnosticMark::new(1, DiagnosticSeverity::Error, "err", "Error"));
        assert!(diags.has_errors());
    }
}
