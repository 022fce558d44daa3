//! Directional piecewise-linear silhouettes
//!
//! A skyline covers the whole horizon axis with contiguous buildings. The
//! first one starts at `-inf`, the last one ends at `+inf`, and together they
//! form the upper envelope (for UP) or lower envelope (for DOWN) of every
//! shape folded into it.
//!
//! DOWN skylines keep their heights negated so that [`merge_buildings`] only
//! ever computes an upper envelope. The sign is applied again by every public
//! height accessor.

use std::collections::VecDeque;
use std::mem;

use crate::errors::GeometryError;
use crate::geometry::{
    Axis, BoundingBox, Direction, Interval, Offset, ProvidesBoxes, ProvidesSegments, Segment,
};

use super::building::{Building, EPS};
use super::pair::SkylinePair;

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

#[derive(Clone, Debug, PartialEq)]
pub struct Skyline {
    buildings: Vec<Building>,
    sky: Direction,
}

impl Skyline {
    /// A skyline with no occupied space
    pub fn new(sky: Direction) -> Self {
        Self {
            buildings: empty_buildings(),
            sky,
        }
    }

    /// Fast path for a single box
    pub fn from_box(b: &BoundingBox, horizon_axis: Axis, sky: Direction) -> Self {
        let horizon = b.at(horizon_axis);
        if b.has_nan() || horizon.length() <= EPS || b.at(horizon_axis.other()).is_empty() {
            return Self::new(sky);
        }
        Self {
            buildings: single_buildings(Building::from_box(b, horizon_axis, sky), horizon.lo),
            sky,
        }
    }

    /// Envelope of a set of boxes
    ///
    /// Boxes narrower than `EPS` along `horizon_axis`, with an empty extent
    /// on the other axis, or with NaN coordinates contribute nothing.
    pub fn from_boxes(boxes: &[BoundingBox], horizon_axis: Axis, sky: Direction) -> Self {
        let vert_axis = horizon_axis.other();
        let mut buildings = Vec::with_capacity(boxes.len());

        for b in boxes {
            if b.has_nan() {
                log::warn!("Skipping box with NaN coordinates: {:?}", b);
                continue;
            }
            if b.at(horizon_axis).length() > EPS && !b.at(vert_axis).is_empty() {
                buildings.push(Building::from_box(b, horizon_axis, sky));
            }
        }

        Self::from_buildings(buildings, sky)
    }

    /// Envelope of a set of straight segments
    pub fn from_segments(segments: &[Segment], horizon_axis: Axis, sky: Direction) -> Self {
        let mut buildings = Vec::with_capacity(segments.len());

        for seg in segments {
            let seg = match horizon_axis {
                Axis::X => *seg,
                Axis::Y => seg.swapped(),
            };
            let (mut left, mut right) = (seg.start, seg.end);
            if left.has_nan() || right.has_nan() {
                log::warn!("Skipping segment with NaN coordinates: {:?}", seg);
                continue;
            }
            if left.x > right.x {
                mem::swap(&mut left, &mut right);
            }
            if (left.x.is_infinite() || right.x.is_infinite()) && left.y != right.y {
                log::warn!("Skipping unbounded sloped segment: {:?}", seg);
                continue;
            }
            if right.x - left.x > EPS {
                let s = sky.sign();
                buildings.push(Building::new(left.x, s * left.y, s * right.y, right.x));
            }
        }

        Self::from_buildings(buildings, sky)
    }

    /// Rebuild the `sky` side of several pairs as one skyline
    pub fn from_skyline_pairs(pairs: &[SkylinePair], horizon_axis: Axis, sky: Direction) -> Self {
        let segments: Vec<Segment> = pairs
            .iter()
            .filter(|pair| !pair[sky].is_empty())
            .flat_map(|pair| pair[sky].to_segments(horizon_axis))
            .collect();
        Self::from_segments(&segments, horizon_axis, sky)
    }

    pub fn from_provider(
        provider: &dyn ProvidesBoxes,
        horizon_axis: Axis,
        sky: Direction,
    ) -> Self {
        Self::from_boxes(&provider.boxes(), horizon_axis, sky)
    }

    pub fn from_segment_provider(
        provider: &dyn ProvidesSegments,
        horizon_axis: Axis,
        sky: Direction,
    ) -> Self {
        Self::from_segments(&provider.segments(), horizon_axis, sky)
    }

    /// Sort, peel off non-overlapping runs, then merge the runs pairwise.
    fn from_buildings(mut buildings: Vec<Building>, sky: Direction) -> Self {
        // Ties on start put the taller building first.
        buildings.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| b.height(b.start).total_cmp(&a.height(a.start)))
        });

        let mut partials = VecDeque::new();
        let mut remaining = buildings;
        while !remaining.is_empty() {
            let (run, rest) = non_overlapping_run(remaining);
            partials.push_back(run);
            remaining = rest;
        }

        while partials.len() > 1 {
            let (Some(a), Some(b)) = (partials.pop_front(), partials.pop_front()) else {
                break;
            };
            partials.push_back(merge_buildings(&a, &b));
        }

        Self {
            buildings: partials.pop_front().unwrap_or_else(empty_buildings),
            sky,
        }
    }

    pub fn direction(&self) -> Direction {
        self.sky
    }

    /// Buildings in internal (UP-normalized) coordinates
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Fold `other` into this skyline. Both must face the same way.
    pub fn merge(&mut self, other: &Skyline) {
        debug_assert_eq!(self.sky, other.sky, "merging skylines of different directions");
        if self.sky != other.sky {
            log::error!(
                "Refusing to merge a {:?} skyline into a {:?} skyline",
                other.sky,
                self.sky
            );
            return;
        }
        self.buildings = merge_buildings(&self.buildings, &other.buildings);
    }

    /// Fold one box into the skyline
    ///
    /// Boxes too narrow to matter are ignored. A NaN coordinate is rejected
    /// and leaves the skyline untouched.
    pub fn insert(&mut self, b: &BoundingBox, horizon_axis: Axis) -> Result<(), GeometryError> {
        let vert_axis = horizon_axis.other();
        for axis in [vert_axis, horizon_axis] {
            if b.at(axis).has_nan() {
                log::warn!("Rejecting box with NaN coordinates: {:?}", b);
                return Err(GeometryError::NanCoordinate(axis));
            }
        }

        let horizon = b.at(horizon_axis);
        if horizon.length() <= EPS || b.at(vert_axis).is_empty() {
            return Ok(());
        }

        let single = single_buildings(Building::from_box(b, horizon_axis, self.sky), horizon.lo);
        self.buildings = merge_buildings(&self.buildings, &single);
        Ok(())
    }

    /// Translate along the height axis by `amount`
    pub fn raise(&mut self, amount: f64) {
        let delta = self.sky.sign() * amount;
        for b in &mut self.buildings {
            b.raise(delta);
        }
    }

    /// Translate along the horizon axis
    pub fn shift(&mut self, amount: f64) {
        for b in &mut self.buildings {
            b.shift(amount);
        }
    }

    /// Minimum separation between this skyline and one facing the other way
    ///
    /// With `horizon_padding > 0` this skyline is first dilated sideways.
    pub fn distance(&self, other: &Skyline, horizon_padding: f64) -> f64 {
        self.distance_and_touching_point(other, horizon_padding).0
    }

    /// Horizon coordinate at which [`Skyline::distance`] is attained
    pub fn touching_point(&self, other: &Skyline, horizon_padding: f64) -> f64 {
        self.distance_and_touching_point(other, horizon_padding).1
    }

    fn distance_and_touching_point(&self, other: &Skyline, horizon_padding: f64) -> (f64, f64) {
        debug_assert_ne!(self.sky, other.sky, "distance needs opposite directions");
        if self.sky == other.sky {
            log::error!("Distance between two {:?} skylines is undefined", self.sky);
            return (NEG_INF, 0.0);
        }

        let padded;
        let me = if horizon_padding != 0.0 {
            padded = self.padded(horizon_padding);
            &padded
        } else {
            self
        };

        let a = &me.buildings;
        let b = &other.buildings;
        let (mut i, mut j) = (0, 0);
        let mut start = NEG_INF;
        let mut dist = NEG_INF;
        let mut touch = NEG_INF;

        while i < a.len() && j < b.len() {
            let end = a[i].end.min(b[j].end);
            let start_dist = a[i].height(start) + b[j].height(start);
            let end_dist = a[i].height(end) + b[j].height(end);
            dist = dist.max(start_dist.max(end_dist));

            if end_dist == dist {
                touch = end;
            } else if start_dist == dist {
                touch = start;
            }

            if b[j].end <= a[i].end {
                j += 1;
            } else {
                i += 1;
            }
            start = end;
        }

        (dist, touch)
    }

    /// Height of the skyline at `x`
    pub fn height(&self, x: f64) -> f64 {
        let h = self
            .buildings
            .iter()
            .find(|b| b.end >= x)
            .map_or(NEG_INF, |b| b.height(x));
        self.sky.sign() * h
    }

    /// Most extreme height: the top of an UP skyline, the bottom of a DOWN one
    pub fn max_height(&self) -> f64 {
        self.sky.sign() * self.distance(&self.floor(), 0.0)
    }

    /// Horizon coordinate of [`Skyline::max_height`]
    pub fn max_height_position(&self) -> f64 {
        self.touching_point(&self.floor(), 0.0)
    }

    fn floor(&self) -> Skyline {
        let mut floor = Skyline::new(self.sky.flip());
        floor.set_minimum_height(0.0);
        floor
    }

    /// Nothing may dip below `h` (above `h` for DOWN)
    pub fn set_minimum_height(&mut self, h: f64) {
        let internal = self.sky.sign() * h;
        let flat = [Building::new(NEG_INF, internal, internal, INF)];
        self.buildings = merge_buildings(&self.buildings, &flat);
    }

    pub fn clear(&mut self) {
        self.buildings = empty_buildings();
    }

    pub fn is_empty(&self) -> bool {
        let front = &self.buildings[0];
        front.end == INF && front.is_sentinel()
    }

    /// Where occupied space begins, `+inf` for an empty skyline
    pub fn left(&self) -> f64 {
        self.buildings
            .iter()
            .find(|b| !b.is_sentinel())
            .map_or(INF, |b| b.start)
    }

    /// Where occupied space ends, `-inf` for an empty skyline
    pub fn right(&self) -> f64 {
        self.buildings
            .iter()
            .rev()
            .find(|b| !b.is_sentinel())
            .map_or(NEG_INF, |b| b.end)
    }

    /// Copy dilated sideways by `horizon_padding`
    ///
    /// Every building edge gets a flat flank of the given width at the edge's
    /// height. Negative padding is ignored with a warning.
    pub fn padded(&self, horizon_padding: f64) -> Skyline {
        if horizon_padding < 0.0 {
            log::warn!("Ignoring negative horizon padding {}", horizon_padding);
            return self.clone();
        }
        if horizon_padding == 0.0 {
            return self.clone();
        }

        let mut pad_boxes = Vec::new();
        let mut last_end = NEG_INF;
        for b in &self.buildings {
            if last_end > NEG_INF {
                let h = b.height(last_end);
                if h > NEG_INF {
                    pad_boxes.push(flank(last_end - horizon_padding, last_end, h));
                }
            }
            if b.end < INF {
                let h = b.height(b.end);
                if h > NEG_INF {
                    pad_boxes.push(flank(b.end, b.end + horizon_padding, h));
                }
            }
            last_end = b.end;
        }

        // Flank heights are already internal, so build them as UP.
        let mut padded = Skyline::from_boxes(&pad_boxes, Axis::X, Direction::Up);
        padded.sky = self.sky;
        padded.merge(self);
        padded
    }

    /// Same buildings, opposite direction: every external height flips sign
    pub fn mirrored(&self) -> Skyline {
        Skyline {
            buildings: self.buildings.clone(),
            sky: self.sky.flip(),
        }
    }

    /// Start and end point of every building, in external coordinates
    pub fn to_points(&self, horizon_axis: Axis) -> Vec<Offset> {
        let s = self.sky.sign();
        let mut points = Vec::with_capacity(2 * self.buildings.len());
        for b in &self.buildings {
            points.push(Offset::new(b.start, s * b.height(b.start)));
            points.push(Offset::new(b.end, s * b.height(b.end)));
        }
        if horizon_axis == Axis::Y {
            for p in &mut points {
                *p = p.swapped();
            }
        }
        points
    }

    /// Occupied buildings as segments, in external coordinates
    pub fn to_segments(&self, horizon_axis: Axis) -> Vec<Segment> {
        let s = self.sky.sign();
        self.buildings
            .iter()
            .filter(|b| !b.is_sentinel())
            .map(|b| {
                let seg = Segment::new(
                    Offset::new(b.start, s * b.height(b.start)),
                    Offset::new(b.end, s * b.height(b.end)),
                );
                match horizon_axis {
                    Axis::X => seg,
                    Axis::Y => seg.swapped(),
                }
            })
            .collect()
    }

    /// Dump every building through the logger
    pub fn log_buildings(&self) {
        log::debug!("{:?} skyline, {} buildings", self.sky, self.buildings.len());
        for b in &self.buildings {
            log::debug!(
                "  [{}, {}) slope {} intercept {}",
                b.start,
                b.end,
                b.slope,
                b.intercept
            );
        }
    }

    pub fn log_points(&self) {
        for p in self.to_points(Axis::X) {
            log::debug!("  ({}, {})", p.x, p.y);
        }
    }
}

impl Default for Skyline {
    fn default() -> Self {
        Self::new(Direction::Up)
    }
}

fn flank(start: f64, end: f64, height: f64) -> BoundingBox {
    BoundingBox::new(Interval::new(start, end), Interval::new(height - 1.0, height))
}

fn empty_buildings() -> Vec<Building> {
    vec![Building::sentinel(NEG_INF, INF)]
}

/// Sentinel, `b` starting at `start`, sentinel
fn single_buildings(mut b: Building, start: f64) -> Vec<Building> {
    if b.end <= start + EPS {
        return empty_buildings();
    }

    let mut out = Vec::with_capacity(3);
    if start > NEG_INF {
        out.push(Building::sentinel(NEG_INF, start));
    }
    b.start = start;
    let end = b.end;
    out.push(b);
    if end < INF {
        out.push(Building::sentinel(end, INF));
    }
    out
}

/// Greedily take buildings that do not overlap and fill the gaps with empty
/// space. Returns the run and the buildings left for later runs.
///
/// Buildings hidden under the previous building of the run are dropped.
fn non_overlapping_run(buildings: Vec<Building>) -> (Vec<Building>, Vec<Building>) {
    let mut run: Vec<Building> = Vec::with_capacity(buildings.len() + 2);
    let mut rest = Vec::new();
    let mut last_end = NEG_INF;

    for mut b in buildings {
        if let Some(last) = run.last() {
            if last.end >= b.end
                && last.height(b.start) >= b.height(b.start)
                && last.height(b.end) >= b.height(b.end)
            {
                continue;
            }
        }

        if b.start < last_end {
            rest.push(b);
            continue;
        }

        if b.start > last_end + EPS {
            run.push(Building::sentinel(last_end, b.start));
        } else {
            b.start = last_end;
        }
        last_end = b.end;
        run.push(b);
    }

    if last_end < INF {
        run.push(Building::sentinel(last_end, INF));
    }
    (run, rest)
}

/// Read position in a building sequence
struct Cursor<'a> {
    buildings: &'a [Building],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buildings: &'a [Building]) -> Self {
        Self { buildings, pos: 0 }
    }

    fn front(&self) -> Option<&'a Building> {
        self.buildings.get(self.pos)
    }

    fn pop_front(&mut self) {
        self.pos += 1;
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.buildings.len()
    }

    fn remaining_after_front(&self) -> &'a [Building] {
        &self.buildings[(self.pos + 1).min(self.buildings.len())..]
    }
}

/// Where `b` stops being the top building, scanning `s` from `start_x`
fn first_intersection(b: &Building, s: &mut Cursor<'_>, mut start_x: f64) -> f64 {
    while let Some(c) = s.front() {
        if start_x >= b.end {
            break;
        }
        if c.conceals(b, start_x) {
            return start_x;
        }

        let i = b.intersection_x(c);
        if i > start_x && i <= b.end && i <= c.end {
            return i;
        }

        start_x = c.end;
        if b.end > c.end {
            s.pop_front();
        }
    }
    b.end
}

/// Pointwise maximum of two building sequences
///
/// Sweeps left to right keeping whichever building is on top. Pieces
/// narrower than `EPS` are not emitted; the next piece absorbs them.
pub(crate) fn merge_buildings(a: &[Building], b: &[Building]) -> Vec<Building> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut s1 = Cursor::new(a);
    let mut s2 = Cursor::new(b);
    let mut x = NEG_INF;
    let mut last_end = NEG_INF;

    while let (Some(front), Some(other)) = (s1.front(), s2.front()) {
        if other.conceals(front, x) {
            mem::swap(&mut s1, &mut s2);
        }
        let Some(&current) = s1.front() else {
            break;
        };

        let mut building = current;
        let end = first_intersection(&building, &mut s2, x);

        if s2.is_empty() {
            building.start = last_end;
            out.push(building);
            out.extend_from_slice(s1.remaining_after_front());
            break;
        }

        if end > x + EPS {
            building.leading_part(end);
            building.start = last_end;
            last_end = end;
            out.push(building);
        }

        if end >= current.end {
            s1.pop_front();
        }
        x = end;
    }

    if out.is_empty() {
        return empty_buildings();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bx(x0: f64, x1: f64, y0: f64, y1: f64) -> BoundingBox {
        BoundingBox::new(Interval::new(x0, x1), Interval::new(y0, y1))
    }

    fn assert_well_formed(s: &Skyline) {
        let b = s.buildings();
        assert_eq!(b[0].start(), NEG_INF);
        assert_eq!(b[b.len() - 1].end(), INF);
        for pair in b.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn test_empty_skyline() {
        let up = Skyline::new(Direction::Up);
        let down = Skyline::new(Direction::Down);
        assert!(up.is_empty());
        assert_eq!(up.height(0.0), NEG_INF);
        assert_eq!(down.height(0.0), INF);
        assert_eq!(up.left(), INF);
        assert_eq!(up.right(), NEG_INF);
    }

    #[test]
    fn test_overlapping_boxes_take_the_upper_envelope() {
        let s = Skyline::from_boxes(
            &[bx(0.0, 4.0, 0.0, 1.0), bx(1.0, 2.0, 0.0, 3.0), bx(3.0, 6.0, 0.0, 2.0)],
            Axis::X,
            Direction::Up,
        );
        assert_well_formed(&s);
        assert_eq!(s.height(0.5), 1.0);
        assert_eq!(s.height(1.5), 3.0);
        assert_eq!(s.height(2.5), 1.0);
        assert_eq!(s.height(3.5), 2.0);
        assert_eq!(s.height(5.5), 2.0);
        assert_eq!(s.height(7.0), NEG_INF);
        assert_eq!(s.left(), 0.0);
        assert_eq!(s.right(), 6.0);
    }

    #[test]
    fn test_down_skyline_reports_bottoms() {
        let s = Skyline::from_boxes(
            &[bx(0.0, 2.0, -1.0, 5.0), bx(1.0, 3.0, -4.0, 0.0)],
            Axis::X,
            Direction::Down,
        );
        assert_well_formed(&s);
        assert_eq!(s.height(0.5), -1.0);
        assert_eq!(s.height(1.5), -4.0);
        assert_eq!(s.max_height(), -4.0);
    }

    #[test]
    fn test_narrow_and_empty_boxes_are_ignored() {
        let s = Skyline::from_boxes(
            &[bx(0.0, 1e-7, 0.0, 5.0), bx(0.0, 1.0, 2.0, 1.0)],
            Axis::X,
            Direction::Up,
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_insert_rejects_nan() {
        let mut s = Skyline::from_box(&bx(0.0, 1.0, 0.0, 1.0), Axis::X, Direction::Up);
        let before = s.clone();
        let err = s.insert(&bx(0.0, 1.0, f64::NAN, 1.0), Axis::X);
        assert_eq!(err, Err(GeometryError::NanCoordinate(Axis::Y)));
        assert_eq!(s, before);
    }

    #[test]
    fn test_insert_merges() {
        let mut s = Skyline::new(Direction::Up);
        s.insert(&bx(0.0, 2.0, 0.0, 1.0), Axis::X).unwrap();
        s.insert(&bx(1.0, 3.0, 0.0, 2.0), Axis::X).unwrap();
        assert_well_formed(&s);
        assert_eq!(s.height(0.5), 1.0);
        assert_eq!(s.height(2.5), 2.0);
    }

    #[test]
    fn test_slanted_segments_cross() {
        let s = Skyline::from_segments(
            &[
                Segment::new(Offset::new(0.0, 0.0), Offset::new(2.0, 2.0)),
                Segment::new(Offset::new(2.0, 0.0), Offset::new(0.0, 2.0)),
            ],
            Axis::X,
            Direction::Up,
        );
        assert_well_formed(&s);
        assert!((s.height(0.5) - 1.5).abs() < 1e-9);
        assert!((s.height(1.5) - 1.5).abs() < 1e-9);
        assert!((s.height(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dominated_segment_is_dropped() {
        let s = Skyline::from_segments(
            &[
                Segment::new(Offset::new(0.0, 5.0), Offset::new(4.0, 5.0)),
                Segment::new(Offset::new(1.0, 1.0), Offset::new(2.0, 2.0)),
            ],
            Axis::X,
            Direction::Up,
        );
        assert_eq!(s.buildings().len(), 3);
        assert_eq!(s.height(1.5), 5.0);
    }

    #[test]
    fn test_raise_and_shift() {
        let mut s = Skyline::from_box(&bx(0.0, 1.0, 0.0, 2.0), Axis::X, Direction::Down);
        // Raising translates the silhouette upwards whatever its direction.
        s.raise(1.0);
        assert_eq!(s.height(0.5), 1.0);
        s.shift(10.0);
        assert_eq!(s.height(10.5), 1.0);
        assert_eq!(s.left(), 10.0);
    }

    #[test]
    fn test_set_minimum_height() {
        let mut s = Skyline::from_box(&bx(0.0, 1.0, 0.0, 2.0), Axis::X, Direction::Up);
        s.set_minimum_height(1.0);
        assert_eq!(s.height(-50.0), 1.0);
        assert_eq!(s.height(0.5), 2.0);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_padded_dilates_sideways() {
        let s = Skyline::from_box(&bx(0.0, 1.0, 0.0, 2.0), Axis::X, Direction::Up);
        let p = s.padded(0.5);
        assert_well_formed(&p);
        assert_eq!(p.height(-0.25), 2.0);
        assert_eq!(p.height(1.25), 2.0);
        assert_eq!(p.height(2.0), NEG_INF);
        assert_eq!(s.padded(-1.0), s);
    }

    #[test]
    fn test_padded_down_skyline_keeps_direction() {
        let s = Skyline::from_box(&bx(0.0, 1.0, -2.0, 0.0), Axis::X, Direction::Down);
        let p = s.padded(0.5);
        assert_eq!(p.direction(), Direction::Down);
        assert_eq!(p.height(-0.25), -2.0);
    }

    #[test]
    fn test_points_along_vertical_axis_are_swapped() {
        let s = Skyline::from_box(&bx(0.0, 2.0, 1.0, 3.0), Axis::Y, Direction::Up);
        // Horizon is Y, so heights are x-extents.
        assert_eq!(s.height(2.0), 2.0);
        let points = s.to_points(Axis::Y);
        assert!(points.contains(&Offset::new(2.0, 1.0)));
        assert!(points.contains(&Offset::new(2.0, 3.0)));
    }

    #[test]
    fn test_max_height_position() {
        let s = Skyline::from_boxes(
            &[bx(0.0, 1.0, 0.0, 1.0), bx(2.0, 3.0, 0.0, 4.0)],
            Axis::X,
            Direction::Up,
        );
        assert_eq!(s.max_height(), 4.0);
        let pos = s.max_height_position();
        assert!((2.0..=3.0).contains(&pos));
    }

    #[test]
    fn test_segment_round_trip_through_pairs() {
        let pair = SkylinePair::from_boxes(&[bx(0.0, 1.0, -1.0, 1.0)], 0.0, Axis::X);
        let rebuilt = Skyline::from_skyline_pairs(&[pair], Axis::X, Direction::Up);
        assert_eq!(rebuilt.height(0.5), 1.0);
        assert_eq!(rebuilt.left(), 0.0);
        assert_eq!(rebuilt.right(), 1.0);
    }

    #[test]
    fn test_build_through_providers() {
        let boxes = vec![bx(0.0, 1.0, 0.0, 2.0)];
        let from_boxes = Skyline::from_provider(&boxes, Axis::X, Direction::Up);
        assert_eq!(from_boxes.height(0.5), 2.0);

        let segments = from_boxes.to_segments(Axis::X);
        assert_eq!(segments.len(), 1);
        let rebuilt = Skyline::from_segment_provider(&segments, Axis::X, Direction::Up);
        rebuilt.log_buildings();
        assert_eq!(rebuilt.height(0.5), 2.0);
        assert_eq!(rebuilt.right(), 1.0);
    }
}
