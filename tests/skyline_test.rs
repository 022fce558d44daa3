// Skyline distances, shifts and areas on small hand-checked shapes

use engraver_wasm::geometry::{Axis, BoundingBox, Direction, Interval, Offset, Segment};
use engraver_wasm::skyline::Skyline;

fn tower(half_width: f64) -> Skyline {
    let b = BoundingBox::new(Interval::new(-half_width, half_width), Interval::new(0.0, 100.0));
    Skyline::from_box(&b, Axis::X, Direction::Up)
}

/// Three teeth hanging down from y = 0
fn teeth() -> Skyline {
    let boxes = [
        BoundingBox::new(Interval::new(-3.0, -2.0), Interval::new(-3.0, 0.0)),
        BoundingBox::new(Interval::new(-1.0, 0.0), Interval::new(-2.0, 0.0)),
        BoundingBox::new(Interval::new(1.0, 2.0), Interval::new(-1.0, 0.0)),
    ];
    Skyline::from_boxes(&boxes, Axis::X, Direction::Down)
}

fn segment(x0: f64, y0: f64, x1: f64, y1: f64, dir: Direction) -> Skyline {
    let seg = Segment::new(Offset::new(x0, y0), Offset::new(x1, y1));
    Skyline::from_segments(&[seg], Axis::X, dir)
}

#[test]
fn test_distance_follows_shifts() {
    let mut t = tower(0.9);
    let e = teeth();
    assert_eq!(t.distance(&e, 0.0), 102.0);

    t.shift(1.0);
    assert_eq!(t.distance(&e, 0.0), 101.0);

    t.shift(-3.0);
    assert_eq!(t.distance(&e, 0.0), 103.0);

    // Now clear of every tooth.
    t.shift(-2.0);
    assert_eq!(t.distance(&e, 0.0), f64::NEG_INFINITY);
}

#[test]
fn test_distance_symmetric_under_mirroring() {
    let t = tower(0.9);
    let e = teeth();
    let forward = t.distance(&e, 0.0);
    let backward = e.mirrored().distance(&t.mirrored(), 0.0);
    assert_eq!(forward, backward);
}

#[test]
fn test_padding_reaches_across_a_gap() {
    let a = Skyline::from_box(
        &BoundingBox::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0)),
        Axis::X,
        Direction::Up,
    );
    let b = Skyline::from_box(
        &BoundingBox::new(Interval::new(1.5, 2.5), Interval::new(0.5, 3.0)),
        Axis::X,
        Direction::Down,
    );
    assert_eq!(a.distance(&b, 0.0), f64::NEG_INFINITY);
    assert_eq!(a.distance(&b, 1.0), 0.5);
}

#[test]
fn test_smallest_shift_narrow_tower() {
    let t = tower(0.4);
    let e = teeth();
    assert!((t.smallest_shift(&e, Direction::RIGHT, 0.0, 0.0) - 0.4).abs() < 1e-9);
    assert!((t.smallest_shift(&e, Direction::LEFT, 0.0, 0.0) + 1.4).abs() < 1e-9);

    assert!((e.smallest_shift(&t, Direction::RIGHT, 0.0, 0.0) - 1.4).abs() < 1e-9);
    assert!((e.smallest_shift(&t, Direction::LEFT, 0.0, 0.0) + 0.4).abs() < 1e-9);
}

#[test]
fn test_smallest_shift_wide_tower_skips_past_teeth() {
    let t = tower(1.0);
    let e = teeth();
    assert_eq!(t.smallest_shift(&e, Direction::RIGHT, 0.0, 0.0), 3.0);
    assert_eq!(t.smallest_shift(&e, Direction::LEFT, 0.0, 0.0), -4.0);
}

#[test]
fn test_smallest_shift_against_empty_skyline() {
    let t = tower(1.0);
    let nothing = Skyline::new(Direction::Down);
    assert_eq!(t.smallest_shift(&nothing, Direction::RIGHT, 0.0, 0.0), 0.0);
}

#[test]
fn test_parallel_slopes() {
    let up = segment(0.0, 0.0, 1.0, 1.0, Direction::Up);
    let mut down = segment(0.0, 0.0, 1.0, 1.0, Direction::Down);
    assert_eq!(up.horizontal_distance(&down, Direction::RIGHT), 0.0);
    assert_eq!(up.horizontal_distance(&down, Direction::LEFT), 0.0);

    down.shift(0.5);
    assert!((up.horizontal_distance(&down, Direction::RIGHT) - 0.5).abs() < 1e-9);
    assert!((up.horizontal_distance(&down, Direction::LEFT) + 0.5).abs() < 1e-9);
}

#[test]
fn test_perpendicular_slopes() {
    let up = segment(0.0, 0.0, 1.0, 1.0, Direction::Up);
    let down = segment(0.0, 1.0, 1.0, 0.0, Direction::Down);
    assert!((up.horizontal_distance(&down, Direction::RIGHT) - 1.0).abs() < 1e-9);
    assert!((up.horizontal_distance(&down, Direction::LEFT) + 1.0).abs() < 1e-9);
}

#[test]
fn test_area_between_flat_and_teeth() {
    let flat = Skyline::from_box(
        &BoundingBox::new(Interval::new(-10.0, 10.0), Interval::new(-5.0, 0.0)),
        Axis::X,
        Direction::Up,
    );
    let e = teeth();
    let wide = Interval::new(-3.0, 2.0);

    let area = flat.area_between(&e, wide, (0.0, 0.0));
    assert!((area + 6.0).abs() < 1e-9);
    assert!((e.area_between(&flat, wide, (0.0, 0.0)) - area).abs() < 1e-9);

    let narrow = flat.area_between(&e, Interval::new(-2.0, 2.0), (0.0, 0.0));
    assert!((narrow + 3.0).abs() < 1e-9);

    let sloped = flat.area_between(&e, wide, (0.0, -1.0));
    assert!((sloped + 5.0).abs() < 1e-9);

    let weighted = flat.weighted_area_between(&e, wide, (0.0, 0.0), 0.5);
    assert!((weighted + 10.0).abs() < 1e-9);
}

#[test]
fn test_merge_with_empty_is_identity() {
    let e = teeth();
    let mut merged = e.clone();
    merged.merge(&Skyline::new(Direction::Down));
    assert_eq!(merged, e);

    let mut empty = Skyline::new(Direction::Down);
    empty.merge(&e);
    assert_eq!(empty, e);
}

#[test]
fn test_merge_is_commutative_on_heights() {
    let a = teeth();
    let b = Skyline::from_box(
        &BoundingBox::new(Interval::new(-2.5, 1.5), Interval::new(-1.5, 0.0)),
        Axis::X,
        Direction::Down,
    );
    let mut ab = a.clone();
    ab.merge(&b);
    let mut ba = b.clone();
    ba.merge(&a);

    for x in [-2.75, -2.25, -1.5, -0.5, 0.5, 1.25, 1.75, 2.5] {
        assert_eq!(ab.height(x), ba.height(x), "height at {}", x);
    }
    assert_eq!(ab.height(-0.5), -2.0);
    assert_eq!(ab.height(0.5), -1.5);
}

#[test]
fn test_vertical_horizon_axis() {
    // Boxes laid along the y axis: the skyline looks right.
    let b = BoundingBox::new(Interval::new(0.0, 4.0), Interval::new(1.0, 2.0));
    let s = Skyline::from_box(&b, Axis::Y, Direction::RIGHT);
    assert_eq!(s.height(1.5), 4.0);
    assert_eq!(s.left(), 1.0);
    assert_eq!(s.right(), 2.0);
}
