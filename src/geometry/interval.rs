//! Closed real intervals
//!
//! An interval with `lo > hi` is empty. The canonical empty interval is
//! `[+inf, -inf]` so that `unite` and `add_point` work without special cases.

use serde::{Deserialize, Serialize};

use super::Direction;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn empty() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    /// The whole real line
    pub fn full() -> Self {
        Self {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Width of the interval, 0 when empty
    pub fn length(&self) -> f64 {
        if self.hi <= self.lo {
            0.0
        } else {
            self.hi - self.lo
        }
    }

    /// Endpoint on the given side: `lo` for Down, `hi` for Up
    pub fn at(&self, dir: Direction) -> f64 {
        match dir {
            Direction::Down => self.lo,
            Direction::Up => self.hi,
        }
    }

    pub fn set(&mut self, dir: Direction, value: f64) {
        match dir {
            Direction::Down => self.lo = value,
            Direction::Up => self.hi = value,
        }
    }

    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    pub fn has_nan(&self) -> bool {
        self.lo.is_nan() || self.hi.is_nan()
    }

    /// Smallest interval containing both
    pub fn unite(&mut self, other: Interval) {
        self.lo = self.lo.min(other.lo);
        self.hi = self.hi.max(other.hi);
    }

    pub fn union(mut self, other: Interval) -> Interval {
        self.unite(other);
        self
    }

    pub fn intersect(&self, other: Interval) -> Interval {
        Interval::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    pub fn add_point(&mut self, x: f64) {
        self.lo = self.lo.min(x);
        self.hi = self.hi.max(x);
    }

    /// Grow by `amount` on both sides
    pub fn widen(&mut self, amount: f64) {
        self.lo -= amount;
        self.hi += amount;
    }

    pub fn translate(&mut self, amount: f64) {
        self.lo += amount;
        self.hi += amount;
    }

    /// Mirror around zero
    pub fn negated(&self) -> Interval {
        Interval::new(-self.hi, -self.lo)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}
