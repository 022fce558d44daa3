//! Up and down silhouettes of one object

use std::ops::{Index, IndexMut};

use crate::errors::GeometryError;
use crate::geometry::{Axis, BoundingBox, Direction, Interval, ProvidesBoxes, Segment};

use super::skyline::Skyline;

#[derive(Clone, Debug, PartialEq)]
pub struct SkylinePair {
    down: Skyline,
    up: Skyline,
}

impl SkylinePair {
    pub fn new() -> Self {
        Self {
            down: Skyline::new(Direction::Down),
            up: Skyline::new(Direction::Up),
        }
    }

    pub fn from_box(b: &BoundingBox, horizon_axis: Axis) -> Self {
        Self {
            down: Skyline::from_box(b, horizon_axis, Direction::Down),
            up: Skyline::from_box(b, horizon_axis, Direction::Up),
        }
    }

    /// Both silhouettes of `boxes`, each box first widened by
    /// `horizon_padding` along the horizon axis
    pub fn from_boxes(boxes: &[BoundingBox], horizon_padding: f64, horizon_axis: Axis) -> Self {
        let widened: Vec<BoundingBox>;
        let boxes = if horizon_padding != 0.0 {
            widened = boxes
                .iter()
                .map(|b| {
                    let mut b = *b;
                    b.at_mut(horizon_axis).widen(horizon_padding);
                    b
                })
                .collect();
            &widened[..]
        } else {
            boxes
        };

        Self {
            down: Skyline::from_boxes(boxes, horizon_axis, Direction::Down),
            up: Skyline::from_boxes(boxes, horizon_axis, Direction::Up),
        }
    }

    /// Outline segments split by side of the horizon axis
    ///
    /// A segment reaching above zero shapes the up skyline, one reaching
    /// below zero shapes the down skyline; a segment crossing zero shapes
    /// both.
    pub fn from_segments(segments: &[Segment], horizon_axis: Axis) -> Self {
        let height_axis = horizon_axis.other();
        let (mut ups, mut downs) = (Vec::new(), Vec::new());
        for seg in segments {
            let (h0, h1) = (seg.start.at(height_axis), seg.end.at(height_axis));
            if h0.max(h1) >= 0.0 {
                ups.push(*seg);
            }
            if h0.min(h1) <= 0.0 {
                downs.push(*seg);
            }
        }

        Self {
            down: Skyline::from_segments(&downs, horizon_axis, Direction::Down),
            up: Skyline::from_segments(&ups, horizon_axis, Direction::Up),
        }
    }

    /// Silhouettes of several layout objects
    pub fn from_providers(
        providers: &[&dyn ProvidesBoxes],
        horizon_padding: f64,
        horizon_axis: Axis,
    ) -> Self {
        let boxes: Vec<BoundingBox> = providers.iter().flat_map(|p| p.boxes()).collect();
        Self::from_boxes(&boxes, horizon_padding, horizon_axis)
    }

    pub fn up(&self) -> &Skyline {
        &self.up
    }

    pub fn down(&self) -> &Skyline {
        &self.down
    }

    pub fn merge(&mut self, other: &SkylinePair) {
        self.down.merge(&other.down);
        self.up.merge(&other.up);
    }

    pub fn insert(&mut self, b: &BoundingBox, horizon_axis: Axis) -> Result<(), GeometryError> {
        self.down.insert(b, horizon_axis)?;
        self.up.insert(b, horizon_axis)
    }

    pub fn raise(&mut self, amount: f64) {
        self.down.raise(amount);
        self.up.raise(amount);
    }

    pub fn shift(&mut self, amount: f64) {
        self.down.shift(amount);
        self.up.shift(amount);
    }

    pub fn padded(&self, horizon_padding: f64) -> SkylinePair {
        Self {
            down: self.down.padded(horizon_padding),
            up: self.up.padded(horizon_padding),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.down.is_empty() && self.up.is_empty()
    }

    pub fn left(&self) -> f64 {
        self.down.left().min(self.up.left())
    }

    pub fn right(&self) -> f64 {
        self.down.right().max(self.up.right())
    }

    /// Lowest bottom to highest top; empty when nothing is occupied
    pub fn extent(&self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        Interval::new(self.down.max_height(), self.up.max_height())
    }

    /// Smallest translation of `self` towards `dir` clearing `other`
    ///
    /// The objects only collide while our top is above their bottom and our
    /// bottom is below their top, so clearing either pairing is enough.
    pub fn smallest_shift(
        &self,
        other: &SkylinePair,
        dir: Direction,
        horizon_padding: f64,
        vertical_padding: f64,
    ) -> f64 {
        let s = dir.sign();
        let over = self
            .up
            .smallest_shift(&other.down, dir, horizon_padding, vertical_padding);
        let under = self
            .down
            .smallest_shift(&other.up, dir, horizon_padding, vertical_padding);
        s * (s * over).min(s * under)
    }

    pub fn log_points(&self) {
        log::debug!("down skyline:");
        self.down.log_points();
        log::debug!("up skyline:");
        self.up.log_points();
    }
}

impl Default for SkylinePair {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Direction> for SkylinePair {
    type Output = Skyline;

    fn index(&self, dir: Direction) -> &Skyline {
        match dir {
            Direction::Down => &self.down,
            Direction::Up => &self.up,
        }
    }
}

impl IndexMut<Direction> for SkylinePair {
    fn index_mut(&mut self, dir: Direction) -> &mut Skyline {
        match dir {
            Direction::Down => &mut self.down,
            Direction::Up => &mut self.up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Offset;

    #[test]
    fn test_pair_from_box() {
        let b = BoundingBox::new(Interval::new(0.0, 2.0), Interval::new(-1.0, 3.0));
        let pair = SkylinePair::from_box(&b, Axis::X);
        assert_eq!(pair[Direction::Up].height(1.0), 3.0);
        assert_eq!(pair[Direction::Down].height(1.0), -1.0);
        assert_eq!(pair.extent(), Interval::new(-1.0, 3.0));
    }

    #[test]
    fn test_padding_widens_boxes() {
        let b = BoundingBox::new(Interval::new(0.0, 2.0), Interval::new(-1.0, 3.0));
        let pair = SkylinePair::from_boxes(&[b], 0.5, Axis::X);
        assert_eq!(pair.left(), -0.5);
        assert_eq!(pair.right(), 2.5);
    }

    #[test]
    fn test_segments_split_by_side() {
        let above = Segment::new(Offset::new(0.0, 1.0), Offset::new(1.0, 2.0));
        let below = Segment::new(Offset::new(0.0, -1.0), Offset::new(1.0, -2.0));
        let pair = SkylinePair::from_segments(&[above, below], Axis::X);
        assert!((pair.up().height(0.5) - 1.5).abs() < 1e-9);
        assert!((pair.down().height(0.5) + 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_raise_and_merge() {
        let b = BoundingBox::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0));
        let mut pair = SkylinePair::from_box(&b, Axis::X);
        pair.raise(2.0);
        assert_eq!(pair.up().height(0.5), 3.0);
        assert_eq!(pair.down().height(0.5), 2.0);

        let mut merged = SkylinePair::new();
        assert!(merged.is_empty());
        merged.merge(&pair);
        assert_eq!(merged, pair);
    }
}
