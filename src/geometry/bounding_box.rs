//! Offsets, boxes and segments
//!
//! Plus the two capability traits through which layout objects hand their
//! outlines to the skyline engine.

use serde::{Deserialize, Serialize};

use super::{Axis, Interval};

/// A point in the layout plane
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn at(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Coordinates exchanged
    pub fn swapped(&self) -> Offset {
        Offset::new(self.y, self.x)
    }

    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

/// Axis-aligned rectangle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x: Interval,
    pub y: Interval,
}

impl BoundingBox {
    pub fn new(x: Interval, y: Interval) -> Self {
        Self { x, y }
    }

    pub fn empty() -> Self {
        Self::new(Interval::empty(), Interval::empty())
    }

    /// Smallest box holding every point, then widened by `widen_x`/`widen_y`
    /// on each side
    pub fn from_points(points: &[Offset], widen_x: f64, widen_y: f64) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.add_point(*p);
        }
        if !b.is_empty() {
            b.x.widen(widen_x);
            b.y.widen(widen_y);
        }
        b
    }

    pub fn at(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn at_mut(&mut self, axis: Axis) -> &mut Interval {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    pub fn has_nan(&self) -> bool {
        self.x.has_nan() || self.y.has_nan()
    }

    pub fn add_point(&mut self, p: Offset) {
        self.x.add_point(p.x);
        self.y.add_point(p.y);
    }

    pub fn unite(&mut self, other: &BoundingBox) {
        self.x.unite(other.x);
        self.y.unite(other.y);
    }

    pub fn translate(&mut self, by: Offset) {
        self.x.translate(by.x);
        self.y.translate(by.y);
    }

    pub fn widen(&mut self, x: f64, y: f64) {
        self.x.widen(x);
        self.y.widen(y);
    }
}

/// A straight outline piece from `start` to `end`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Offset,
    pub end: Offset,
}

impl Segment {
    pub fn new(start: Offset, end: Offset) -> Self {
        Self { start, end }
    }

    pub fn swapped(&self) -> Segment {
        Segment::new(self.start.swapped(), self.end.swapped())
    }
}

/// Anything that occupies space as a set of rectangles
pub trait ProvidesBoxes {
    fn boxes(&self) -> Vec<BoundingBox>;
}

/// Anything whose outline is a set of straight segments
pub trait ProvidesSegments {
    fn segments(&self) -> Vec<Segment>;
}

impl ProvidesBoxes for BoundingBox {
    fn boxes(&self) -> Vec<BoundingBox> {
        vec![*self]
    }
}

impl ProvidesBoxes for [BoundingBox] {
    fn boxes(&self) -> Vec<BoundingBox> {
        self.to_vec()
    }
}

impl ProvidesBoxes for Vec<BoundingBox> {
    fn boxes(&self) -> Vec<BoundingBox> {
        self.clone()
    }
}

impl ProvidesSegments for Segment {
    fn segments(&self) -> Vec<Segment> {
        vec![*self]
    }
}

impl ProvidesSegments for [Segment] {
    fn segments(&self) -> Vec<Segment> {
        self.to_vec()
    }
}

impl ProvidesSegments for Vec<Segment> {
    fn segments(&self) -> Vec<Segment> {
        self.clone()
    }
}
