//! Horizontal clearance and overlap area between opposite skylines
//!
//! `smallest_shift` answers "how far sideways must this object move so it no
//! longer collides with that one". `area_between` measures how much two
//! silhouettes overlap over a range, as a badness term for placement.

use crate::geometry::{Direction, Interval};

use super::building::Building;
use super::skyline::Skyline;

impl Skyline {
    /// Smallest translation of `self` towards `dir` (RIGHT is positive) that
    /// clears `other`
    ///
    /// `other` must face the opposite way. Regions that merely touch at a
    /// single shift value do not collide; vertical contact does. `self` is
    /// dilated by `horizon_padding` and the two are kept at least
    /// `vertical_padding` apart. Returns 0 when either skyline is empty.
    pub fn smallest_shift(
        &self,
        other: &Skyline,
        dir: Direction,
        horizon_padding: f64,
        vertical_padding: f64,
    ) -> f64 {
        debug_assert_ne!(
            self.direction(),
            other.direction(),
            "horizontal shift needs opposite directions"
        );
        if self.direction() == other.direction() {
            log::error!(
                "Shift between two {:?} skylines is undefined",
                self.direction()
            );
            return 0.0;
        }
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        let padded = self.padded(horizon_padding);
        let mut forbidden = Vec::new();
        for mine in padded.buildings().iter().filter(|b| !b.is_sentinel()) {
            for theirs in other.buildings().iter().filter(|b| !b.is_sentinel()) {
                let iv = colliding_shifts(mine, theirs, vertical_padding);
                if !iv.is_empty() {
                    forbidden.push(iv);
                }
            }
        }

        nearest_free_shift(forbidden, dir)
    }

    pub fn horizontal_distance(&self, other: &Skyline, dir: Direction) -> f64 {
        self.smallest_shift(other, dir, 0.0, 0.0)
    }

    /// Overlap area between `self` and an opposite skyline over `range`
    ///
    /// Equivalent to [`Skyline::weighted_area_between`] with ratio 1.
    pub fn area_between(&self, other: &Skyline, range: Interval, boundary: (f64, f64)) -> f64 {
        self.weighted_area_between(other, range, boundary, 1.0)
    }

    /// Negated integral of the vertical overlap between two opposite skylines
    ///
    /// The overlap at `x` is `h_self(x) + h_other(x)` in internal heights, so
    /// it is positive where the silhouettes intrude on each other. Wherever
    /// either side is empty the overlap follows the straight line between
    /// `boundary.0` at `range.lo` and `boundary.1` at `range.hi`. `ratio`
    /// blends the plain overlap with its signed square: a ratio below 1
    /// weights deep intrusion more than shallow. An empty or unbounded range
    /// yields 0.
    pub fn weighted_area_between(
        &self,
        other: &Skyline,
        range: Interval,
        boundary: (f64, f64),
        ratio: f64,
    ) -> f64 {
        debug_assert_ne!(
            self.direction(),
            other.direction(),
            "area between needs opposite directions"
        );
        if self.direction() == other.direction() {
            log::error!(
                "Area between two {:?} skylines is undefined",
                self.direction()
            );
            return 0.0;
        }
        if range.is_empty() || range.length() == 0.0 {
            return 0.0;
        }
        if range.lo.is_infinite() || range.hi.is_infinite() {
            log::warn!("Area between skylines over unbounded range {:?}", range);
            return 0.0;
        }

        let boundary_at = |x: f64| {
            boundary.0 + (boundary.1 - boundary.0) * (x - range.lo) / (range.hi - range.lo)
        };
        let overlap_at = |a: &Building, b: &Building, x: f64| {
            if a.is_sentinel() || b.is_sentinel() {
                boundary_at(x)
            } else {
                a.height(x) + b.height(x)
            }
        };

        let a = self.buildings();
        let b = other.buildings();
        let (mut i, mut j) = (0, 0);
        let mut start = f64::NEG_INFINITY;
        let mut linear = 0.0;
        let mut quadratic = 0.0;

        while i < a.len() && j < b.len() {
            let end = a[i].end().min(b[j].end());
            let x0 = start.max(range.lo);
            let x1 = end.min(range.hi);

            if x1 > x0 {
                let s0 = overlap_at(&a[i], &b[j], x0);
                let s1 = overlap_at(&a[i], &b[j], x1);
                let width = x1 - x0;
                linear += width * (s0 + s1) / 2.0;
                quadratic += signed_square_integral(s0, s1, width);
            }

            if b[j].end() <= a[i].end() {
                j += 1;
            } else {
                i += 1;
            }
            start = end;
        }

        -(ratio * linear + (1.0 - ratio) * quadratic)
    }
}

/// Shifts `s` of `mine` for which `mine` moved by `s` collides with `theirs`
///
/// Both heights are linear in `x` and `s`, so the colliding set is convex and
/// equals the hull of the collisions found at the four domain endpoints.
fn colliding_shifts(mine: &Building, theirs: &Building, vertical_padding: f64) -> Interval {
    let (a0, a1) = (mine.start(), mine.end());
    let (b0, b1) = (theirs.start(), theirs.end());

    if a0.is_infinite() && a1.is_infinite() && b0.is_infinite() && b1.is_infinite() {
        return if mine.intercept() + theirs.intercept() + vertical_padding >= 0.0 {
            Interval::full()
        } else {
            Interval::empty()
        };
    }

    let mut hull = Interval::empty();
    let mut take = |iv: Interval| {
        if !iv.is_empty() {
            hull.unite(iv);
        }
    };

    // An endpoint of `mine`, moved by s, lands inside `theirs`.
    for a in [a0, a1] {
        if a.is_finite() {
            let c0 = mine.height(a) + theirs.height(a) + vertical_padding;
            take(solve_linear(b0 - a, b1 - a, c0, theirs.slope()));
        }
    }
    // An endpoint of `theirs` lies inside the moved `mine`.
    for b in [b0, b1] {
        if b.is_finite() {
            let c0 = mine.height(b) + theirs.height(b) + vertical_padding;
            take(solve_linear(b - a1, b - a0, c0, -mine.slope()));
        }
    }

    hull
}

/// `{ s in [lo, hi] : c0 + c1 * s >= 0 }`
fn solve_linear(lo: f64, hi: f64, c0: f64, c1: f64) -> Interval {
    let mut iv = Interval::new(lo, hi);
    if iv.is_empty() {
        return iv;
    }
    if c1 == 0.0 {
        return if c0 >= 0.0 { iv } else { Interval::empty() };
    }

    let root = -c0 / c1;
    if c1 > 0.0 {
        iv.lo = iv.lo.max(root);
    } else {
        iv.hi = iv.hi.min(root);
    }
    iv
}

/// First shift from 0 towards `dir` outside every open forbidden interval
fn nearest_free_shift(mut forbidden: Vec<Interval>, dir: Direction) -> f64 {
    if dir == Direction::LEFT {
        for iv in &mut forbidden {
            *iv = iv.negated();
        }
    }
    forbidden.sort_by(|a, b| a.lo.total_cmp(&b.lo));

    let mut shift: f64 = 0.0;
    for iv in &forbidden {
        if iv.lo < shift && shift < iv.hi {
            shift = iv.hi;
        }
    }
    dir.sign() * shift
}

/// Integral of `s * |s|` over a segment where `s` runs linearly from `s0`
/// to `s1`
fn signed_square_integral(s0: f64, s1: f64, width: f64) -> f64 {
    if s0 * s1 >= 0.0 {
        let sign = if s0 + s1 >= 0.0 { 1.0 } else { -1.0 };
        return sign * width * (s0 * s0 + s0 * s1 + s1 * s1) / 3.0;
    }

    // Split at the zero crossing.
    let t = s0 / (s0 - s1);
    s0.signum() * width * t * s0 * s0 / 3.0 + s1.signum() * width * (1.0 - t) * s1 * s1 / 3.0
}
