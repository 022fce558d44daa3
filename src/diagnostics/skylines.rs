//! Skyline diagnostics - checks the structural invariants of a skyline
//!
//! A well-formed skyline:
//! - starts at -inf and ends at +inf
//! - has each building ending where the next one starts
//! - has only flat buildings where the domain is unbounded
//! - has no NaN parameters

use crate::skyline::Skyline;

use super::{DiagnosticMark, DiagnosticSeverity};

/// Analyze a skyline, one mark per violated invariant
pub fn analyze_skyline(skyline: &Skyline) -> Vec<DiagnosticMark> {
    let mut marks = Vec::new();
    let buildings = skyline.buildings();

    let (Some(first), Some(last)) = (buildings.first(), buildings.last()) else {
        marks.push(DiagnosticMark::new(
            0,
            DiagnosticSeverity::Error,
            "skyline_no_buildings",
            "Skyline has no buildings",
        ));
        return marks;
    };

    if first.start() != f64::NEG_INFINITY {
        marks.push(DiagnosticMark::new(
            0,
            DiagnosticSeverity::Error,
            "skyline_open_start",
            format!("First building starts at {} instead of -inf", first.start()),
        ));
    }
    if last.end() != f64::INFINITY {
        marks.push(DiagnosticMark::new(
            buildings.len() - 1,
            DiagnosticSeverity::Error,
            "skyline_open_end",
            format!("Last building ends at {} instead of +inf", last.end()),
        ));
    }

    for (idx, b) in buildings.iter().enumerate() {
        if [b.start(), b.end(), b.slope(), b.intercept()]
            .iter()
            .any(|v| v.is_nan())
        {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Error,
                "skyline_nan",
                "Building has NaN parameters",
            ));
        }
        if (b.start().is_infinite() || b.end().is_infinite()) && b.slope() != 0.0 {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Error,
                "skyline_unbounded_slope",
                format!("Unbounded building has slope {}", b.slope()),
            ));
        }
        if b.end() < b.start() {
            marks.push(DiagnosticMark::new(
                idx,
                DiagnosticSeverity::Error,
                "skyline_inverted_building",
                format!("Building ends at {} before it starts at {}", b.end(), b.start()),
            ));
        }
    }

    for (idx, pair) in buildings.windows(2).enumerate() {
        if pair[0].end() != pair[1].start() {
            marks.push(
                DiagnosticMark::new(
                    idx,
                    DiagnosticSeverity::Warning,
                    "skyline_gap",
                    format!(
                        "Building ends at {} but the next starts at {}",
                        pair[0].end(),
                        pair[1].start()
                    ),
                )
                .with_len(2),
            );
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Axis, BoundingBox, Direction, Interval};

    #[test]
    fn test_constructed_skylines_are_clean() {
        let boxes: Vec<BoundingBox> = (0..20)
            .map(|i| {
                let x = i as f64 * 0.7;
                BoundingBox::new(Interval::new(x, x + 1.3), Interval::new(0.0, (i % 5) as f64))
            })
            .collect();
        for dir in Direction::both() {
            let s = Skyline::from_boxes(&boxes, Axis::X, dir);
            assert!(analyze_skyline(&s).is_empty(), "{:?}", analyze_skyline(&s));
            assert!(analyze_skyline(&s.padded(0.3)).is_empty());
        }
    }

    #[test]
    fn test_empty_skyline_is_clean() {
        assert!(analyze_skyline(&Skyline::new(Direction::Up)).is_empty());
    }
}
