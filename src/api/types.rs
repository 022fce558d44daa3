//! Shared types for the WASM API
//!
//! Result shapes handed back to JavaScript.

use crate::breaking::{LineBreaking, LineShape};
use crate::diagnostics::DiagnosticMark;

/// One line of a breaking result
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct LineSummary {
    pub start: usize,
    pub end: usize,
    pub force: f64,
    pub shape: LineShape,
}

/// Result of a line breaking query
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct BreakResult {
    pub breakpoints: Vec<usize>,
    pub lines: Vec<LineSummary>,
    pub demerits: f64,
    pub diagnostics: Vec<DiagnosticMark>,
}

impl BreakResult {
    pub fn new(solution: &LineBreaking, diagnostics: Vec<DiagnosticMark>) -> Self {
        let lines = solution
            .breakpoints
            .windows(2)
            .zip(&solution.lines)
            .map(|(bounds, details)| LineSummary {
                start: bounds[0],
                end: bounds[1],
                force: details.force,
                shape: details.shape,
            })
            .collect();

        Self {
            breakpoints: solution.breakpoints.clone(),
            lines,
            demerits: solution.demerits,
            diagnostics,
        }
    }
}
