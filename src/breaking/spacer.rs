//! Span costs for the line breaker
//!
//! The breaker asks a [`SpanCostProvider`] how badly a run of columns fits on
//! one line. [`SpringSpacer`] is the bundled provider: every column is a
//! spring with a natural width, a stretchability and a shrinkability, and its
//! vertical silhouette comes from the column's boxes.

use serde::{Deserialize, Serialize};

use super::line_details::BreakPermission;
use super::line_shape::LineShape;
use crate::geometry::{Axis, BoundingBox, Interval, ProvidesBoxes};
use crate::skyline::SkylinePair;

/// Break metadata of the boundary before a column
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Breakpoint {
    pub permission: BreakPermission,
    pub penalty: f64,
    pub page_permission: BreakPermission,
    pub page_penalty: f64,
    pub turn_permission: BreakPermission,
    pub turn_penalty: f64,
}

/// How one span of columns fares as a single line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanCost {
    /// Spacing force; `+inf` when the span cannot be set as one line
    pub force: f64,
    /// Whether the content fits the line width at all, compressed if need
    /// be. A span too short to stretch still fits.
    pub fits: bool,
    pub shape: LineShape,
}

impl SpanCost {
    pub fn infeasible() -> Self {
        Self {
            force: f64::INFINITY,
            fits: false,
            shape: LineShape::empty(),
        }
    }
}

/// Source of line costs for the breaker
///
/// Boundary `k` is the position before column `k`; boundaries `0` and
/// `column_count()` always exist. A line covers the columns between two
/// boundaries.
pub trait SpanCostProvider {
    fn column_count(&self) -> usize;

    /// Break metadata of boundary `boundary`
    fn breakpoint(&self, boundary: usize) -> Breakpoint;

    /// Cost of setting columns `[start, end)` as one line
    fn span_cost(&self, start: usize, end: usize) -> SpanCost;
}

/// One horizontally placed unit of content
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Column {
    /// Natural width
    pub width: f64,
    /// How much the column can grow per unit of force
    pub stretch: f64,
    /// How much the column can give up when compressed
    pub shrink: f64,
    /// Whether a line may end after this column
    pub break_permission: BreakPermission,
    pub break_penalty: f64,
    pub page_permission: BreakPermission,
    pub page_penalty: f64,
    pub turn_permission: BreakPermission,
    pub turn_penalty: f64,
    /// Outline of the column's content, relative to the staff reference
    pub boxes: Vec<BoundingBox>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            width: 0.0,
            stretch: 1.0,
            shrink: 0.0,
            break_permission: BreakPermission::Allow,
            break_penalty: 0.0,
            page_permission: BreakPermission::Allow,
            page_penalty: 0.0,
            turn_permission: BreakPermission::Allow,
            turn_penalty: 0.0,
            boxes: Vec::new(),
        }
    }
}

impl Column {
    pub fn new(width: f64, stretch: f64, shrink: f64) -> Self {
        Self {
            width,
            stretch,
            shrink,
            ..Self::default()
        }
    }

    pub fn with_permission(mut self, permission: BreakPermission) -> Self {
        self.break_permission = permission;
        self
    }

    pub fn with_boxes(mut self, boxes: Vec<BoundingBox>) -> Self {
        self.boxes = boxes;
        self
    }

    fn breakpoint(&self) -> Breakpoint {
        Breakpoint {
            permission: self.break_permission,
            penalty: self.break_penalty,
            page_permission: self.page_permission,
            page_penalty: self.page_penalty,
            turn_permission: self.turn_permission,
            turn_penalty: self.turn_penalty,
        }
    }
}

impl ProvidesBoxes for Column {
    fn boxes(&self) -> Vec<BoundingBox> {
        self.boxes.clone()
    }
}

/// Springs-and-rods spacing of a column sequence on lines of fixed width
pub struct SpringSpacer<'a> {
    columns: &'a [Column],
    line_width: f64,
    /// Vertical extent of each column
    extents: Vec<Interval>,
    // Prefix sums over columns, one entry longer than `columns`.
    widths: Vec<f64>,
    stretches: Vec<f64>,
    shrinks: Vec<f64>,
    forced: Vec<usize>,
}

impl<'a> SpringSpacer<'a> {
    pub fn new(columns: &'a [Column], line_width: f64) -> Self {
        let extents = columns
            .iter()
            .map(|c| SkylinePair::from_providers(&[c as &dyn ProvidesBoxes], 0.0, Axis::X).extent())
            .collect();

        let prefix = |f: &dyn Fn(&Column) -> f64| {
            let mut sums = Vec::with_capacity(columns.len() + 1);
            let mut acc = 0.0;
            sums.push(acc);
            for c in columns {
                acc += f(c);
                sums.push(acc);
            }
            sums
        };
        let widths = prefix(&|c: &Column| c.width);
        let stretches = prefix(&|c: &Column| c.stretch);
        let shrinks = prefix(&|c: &Column| c.shrink);

        let mut forced = Vec::with_capacity(columns.len() + 1);
        forced.push(0);
        for c in columns {
            let last = forced.last().copied().unwrap_or(0);
            forced.push(last + usize::from(c.break_permission == BreakPermission::Force));
        }

        Self {
            columns,
            line_width,
            extents,
            widths,
            stretches,
            shrinks,
            forced,
        }
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Natural width of columns `[start, end)`
    pub fn natural_width(&self, start: usize, end: usize) -> f64 {
        self.widths[end] - self.widths[start]
    }

    /// A forced break strictly inside the span splits it.
    fn crosses_forced_break(&self, start: usize, end: usize) -> bool {
        self.forced[end - 1] > self.forced[start]
    }

    fn fits(&self, start: usize, end: usize) -> bool {
        let shrink = self.shrinks[end] - self.shrinks[start];
        !self.crosses_forced_break(start, end)
            && self.natural_width(start, end) - shrink <= self.line_width
    }

    fn force(&self, start: usize, end: usize) -> f64 {
        if self.crosses_forced_break(start, end) {
            return f64::INFINITY;
        }

        let slack = self.line_width - self.natural_width(start, end);
        if slack >= 0.0 {
            let stretch = self.stretches[end] - self.stretches[start];
            if stretch > 0.0 {
                slack / stretch
            } else if slack == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            let shrink = self.shrinks[end] - self.shrinks[start];
            if shrink > 0.0 && -slack <= shrink {
                slack / shrink
            } else {
                f64::INFINITY
            }
        }
    }

    fn shape(&self, start: usize, end: usize) -> LineShape {
        let begin = self.extents[start];
        if end == start + 1 {
            return LineShape::new(begin, begin);
        }
        let rest = self.extents[start + 1..end]
            .iter()
            .fold(Interval::empty(), |acc, iv| acc.union(*iv));
        LineShape::new(begin, rest)
    }
}

impl SpanCostProvider for SpringSpacer<'_> {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn breakpoint(&self, boundary: usize) -> Breakpoint {
        let n = self.columns.len();
        if boundary == 0 || n == 0 {
            return Breakpoint::default();
        }
        let mut bp = self.columns[boundary.min(n) - 1].breakpoint();
        if boundary >= n {
            // The end of the piece is always a break.
            bp.permission = BreakPermission::Force;
        }
        bp
    }

    fn span_cost(&self, start: usize, end: usize) -> SpanCost {
        if end <= start || end > self.columns.len() {
            return SpanCost::infeasible();
        }
        SpanCost {
            force: self.force(start, end),
            fits: self.fits(start, end),
            shape: self.shape(start, end),
        }
    }
}
