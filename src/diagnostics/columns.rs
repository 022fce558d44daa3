//! Column diagnostics - flags column data the spacer cannot use
//!
//! Bad widths or springs make every line through the column infeasible,
//! which otherwise only shows up as "no solution" from the breaker.

use crate::breaking::{BreakPermission, Column};

use super::{DiagnosticMark, DiagnosticSeverity};

/// Analyze a column sequence before line breaking
pub fn analyze_columns(columns: &[Column], line_width: f64) -> Vec<DiagnosticMark> {
    let mut marks = Vec::new();

    for (idx, column) in columns.iter().enumerate() {
        if !column.width.is_finite() || column.width < 0.0 {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Error,
                "column_bad_width",
                format!("Column width {} is not a finite non-negative number", column.width),
            ));
        }
        if column.stretch.is_nan() || column.stretch < 0.0 || column.shrink.is_nan() || column.shrink < 0.0 {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Error,
                "column_bad_spring",
                format!(
                    "Column spring has stretch {} and shrink {}",
                    column.stretch, column.shrink
                ),
            ));
        }
        if column.width - column.shrink > line_width {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Warning,
                "column_too_wide",
                format!(
                    "Column needs {} even when compressed, line is {}",
                    column.width - column.shrink,
                    line_width
                ),
            ));
        }
        if let Some(b) = column.boxes.iter().find(|b| b.has_nan()) {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Warning,
                "column_nan_box",
                format!("Column box {:?} has NaN coordinates and is ignored", b),
            ));
        }
    }

    let breakable = columns
        .iter()
        .take(columns.len().saturating_sub(1))
        .filter(|c| c.break_permission != BreakPermission::Forbid)
        .count();
    if columns.len() > 1 && breakable == 0 {
        marks.push(
            DiagnosticMark::new(
                0,
                DiagnosticSeverity::Info,
                "columns_unbreakable",
                "No column allows a line break; the piece fits on one line or not at all",
            )
            .with_len(columns.len()),
        );
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_columns() {
        let columns = vec![Column::new(2.0, 1.0, 0.5); 5];
        assert!(analyze_columns(&columns, 10.0).is_empty());
    }

    #[test]
    fn test_bad_columns() {
        let columns = vec![
            Column::new(f64::NAN, 1.0, 0.0),
            Column::new(20.0, 1.0, 0.0),
            Column::new(1.0, -1.0, 0.0),
        ];
        let kinds: Vec<String> = analyze_columns(&columns, 10.0)
            .into_iter()
            .map(|m| m.kind)
            .collect();
        assert_eq!(kinds, vec!["column_bad_width", "column_too_wide", "column_bad_spring"]);
    }

    #[test]
    fn test_unbreakable_columns() {
        let columns = vec![Column::new(1.0, 1.0, 0.0).with_permission(BreakPermission::Forbid); 3];
        let marks = analyze_columns(&columns, 10.0);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].kind, "columns_unbreakable");
        assert_eq!(marks[0].len, 3);
    }
}
