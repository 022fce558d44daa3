//! Coarse vertical silhouette of a line
//!
//! A line is summarised by two extents: the first column (clefs, key
//! signatures and the like) and everything after it. That is enough to stack
//! lines without carrying full skylines around.

use serde::{Deserialize, Serialize};

use crate::geometry::Interval;
use crate::skyline::SkylinePair;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LineShape {
    pub begin: Interval,
    pub rest: Interval,
}

impl LineShape {
    pub fn new(begin: Interval, rest: Interval) -> Self {
        Self { begin, rest }
    }

    pub fn empty() -> Self {
        Self::new(Interval::empty(), Interval::empty())
    }

    /// Vertical extents of the first column and of the remainder
    pub fn from_skylines(begin: &SkylinePair, rest: &SkylinePair) -> Self {
        Self::new(begin.extent(), rest.extent())
    }

    pub fn is_empty(&self) -> bool {
        self.begin.is_empty() && self.rest.is_empty()
    }

    pub fn extent(&self) -> Interval {
        self.begin.union(self.rest)
    }

    /// Height above our reference point at which `mount`'s reference point
    /// must sit for `mount` to clear us
    pub fn elevation(&self, mount: &LineShape) -> f64 {
        (self.begin.hi - mount.begin.lo).max(self.rest.hi - mount.rest.lo)
    }

    /// Combined shape of `mount` resting on top of us, `padding` apart,
    /// in our coordinates
    pub fn piggyback(&self, mount: &LineShape, padding: f64) -> LineShape {
        if mount.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *mount;
        }

        let lift = self.elevation(mount) + padding;
        LineShape::new(
            Interval::new(self.begin.lo, lift + mount.begin.hi),
            Interval::new(self.rest.lo, lift + mount.rest.hi),
        )
    }

    pub fn translated(&self, dy: f64) -> LineShape {
        let mut shape = *self;
        shape.begin.translate(dy);
        shape.rest.translate(dy);
        shape
    }
}

impl Default for LineShape {
    fn default() -> Self {
        Self::empty()
    }
}
