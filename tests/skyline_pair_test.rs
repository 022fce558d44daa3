// Skyline pairs: shifting whole objects past each other

use engraver_wasm::geometry::{Axis, BoundingBox, Direction, Interval};
use engraver_wasm::skyline::SkylinePair;

fn bx(x0: f64, x1: f64, y0: f64, y1: f64) -> BoundingBox {
    BoundingBox::new(Interval::new(x0, x1), Interval::new(y0, y1))
}

fn teeth() -> SkylinePair {
    SkylinePair::from_boxes(
        &[
            bx(-3.0, -2.0, -3.0, 0.0),
            bx(-1.0, 0.0, -2.0, 0.0),
            bx(1.0, 2.0, -1.0, 0.0),
        ],
        0.0,
        Axis::X,
    )
}

#[test]
fn test_interleaved_objects_must_clear_sideways() {
    let tower = SkylinePair::from_box(&bx(-0.4, 0.4, 0.0, 100.0), Axis::X);
    let e = teeth();

    assert!((tower.smallest_shift(&e, Direction::RIGHT, 0.0, 0.0) - 0.4).abs() < 1e-9);
    assert!((tower.smallest_shift(&e, Direction::LEFT, 0.0, 0.0) + 1.4).abs() < 1e-9);
    assert!((e.smallest_shift(&tower, Direction::RIGHT, 0.0, 0.0) - 1.4).abs() < 1e-9);
    assert!((e.smallest_shift(&tower, Direction::LEFT, 0.0, 0.0) + 0.4).abs() < 1e-9);
}

#[test]
fn test_wide_object_clears_the_outer_teeth() {
    let tower = SkylinePair::from_box(&bx(-1.0, 1.0, 0.0, 100.0), Axis::X);
    let e = teeth();

    assert!((tower.smallest_shift(&e, Direction::RIGHT, 0.0, 0.0) - 3.0).abs() < 1e-9);
    assert!((tower.smallest_shift(&e, Direction::LEFT, 0.0, 0.0) + 4.0).abs() < 1e-9);
}

#[test]
fn test_object_above_needs_no_shift() {
    let tower = SkylinePair::from_box(&bx(-0.4, 0.4, 1.0, 100.0), Axis::X);
    let e = teeth();
    assert_eq!(tower.smallest_shift(&e, Direction::RIGHT, 0.0, 0.0), 0.0);
    assert_eq!(tower.smallest_shift(&e, Direction::LEFT, 0.0, 0.0), 0.0);
}

#[test]
fn test_shifted_pair_follows_its_boxes() {
    let mut p = SkylinePair::from_box(&bx(0.0, 2.0, -1.0, 1.0), Axis::X);
    p.shift(3.0);
    assert_eq!(p.left(), 3.0);
    assert_eq!(p.right(), 5.0);
    assert_eq!(p.up().height(4.0), 1.0);
    assert_eq!(p.down().height(4.0), -1.0);
}

#[test]
fn test_extent_of_merged_pairs() {
    let mut p = teeth();
    p.merge(&SkylinePair::from_box(&bx(5.0, 6.0, 2.0, 4.0), Axis::X));
    assert_eq!(p.extent(), Interval::new(-3.0, 4.0));

    let mut empty = SkylinePair::new();
    assert!(empty.extent().is_empty());
    empty.insert(&bx(0.0, 1.0, 0.0, 1.0), Axis::X).unwrap();
    assert!(!empty.is_empty());
}
