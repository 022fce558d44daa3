//! A single linear piece of a skyline
//!
//! Heights stored here are internal: a DOWN skyline keeps its buildings
//! sign-inverted so that merging is always an upper-envelope operation.

use crate::geometry::{Axis, BoundingBox, Direction};

/// Widths and separations below this are treated as zero.
pub const EPS: f64 = 1e-5;

/// `height(x) = slope * x + intercept` on `[start, end)`
///
/// An infinite `start` or `end` implies `slope == 0`. A building whose
/// intercept is `-inf` marks empty space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub(crate) start: f64,
    pub(crate) end: f64,
    pub(crate) slope: f64,
    pub(crate) intercept: f64,
}

impl Building {
    /// Building through `(start, start_height)` and `(end, end_height)`
    pub fn new(start: f64, start_height: f64, end_height: f64, end: f64) -> Self {
        let infinite = start.is_infinite() || end.is_infinite();
        debug_assert!(
            !infinite || start_height == end_height,
            "infinite building must be flat"
        );

        let slope = if start_height == end_height || infinite {
            0.0
        } else {
            (end_height - start_height) / (end - start)
        };
        let intercept = if start.is_infinite() {
            start_height
        } else {
            start_height - slope * start
        };

        Self {
            start,
            end,
            slope,
            intercept,
        }
    }

    /// Empty space over `[start, end)`
    pub fn sentinel(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            slope: 0.0,
            intercept: f64::NEG_INFINITY,
        }
    }

    /// Flat top (or bottom, for DOWN) of a box
    pub fn from_box(b: &BoundingBox, horizon_axis: Axis, sky: Direction) -> Self {
        let horizon = b.at(horizon_axis);
        let height = sky.sign() * b.at(horizon_axis.other()).at(sky);
        Self::new(horizon.lo, height, height, horizon.hi)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn is_sentinel(&self) -> bool {
        self.intercept == f64::NEG_INFINITY
    }

    /// Internal height at `x`
    pub fn height(&self, x: f64) -> f64 {
        if x.is_infinite() {
            self.intercept
        } else {
            self.slope * x + self.intercept
        }
    }

    /// x where the two lines cross; `-inf` when they never do
    pub fn intersection_x(&self, other: &Building) -> f64 {
        let ret = (self.intercept - other.intercept) / (other.slope - self.slope);
        if ret.is_nan() {
            f64::NEG_INFINITY
        } else {
            ret
        }
    }

    /// Truncate the domain at `chop`
    pub fn leading_part(&mut self, chop: f64) {
        debug_assert!(chop <= self.end, "chop {} past end {}", chop, self.end);
        self.end = chop;
    }

    /// Whether `self` lies on or above `other` everywhere to the right of `x`
    pub fn conceals(&self, other: &Building, x: f64) -> bool {
        if self.slope == other.slope {
            return self.intercept > other.intercept;
        }

        // Past the crossing point the steeper line is on top.
        let i = self.intersection_x(other);
        (i <= x && self.slope > other.slope) || (i > x && self.slope < other.slope)
    }

    pub(crate) fn shift(&mut self, amount: f64) {
        self.intercept -= amount * self.slope;
        self.start += amount;
        self.end += amount;
    }

    pub(crate) fn raise(&mut self, amount: f64) {
        self.intercept += amount;
    }
}
