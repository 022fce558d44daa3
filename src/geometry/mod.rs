//! Geometry primitives
//!
//! Axes, directions, intervals, offsets, boxes and segments shared by the
//! skyline engine and the line breaker. Everything here is a plain `Copy`
//! value type.

pub mod bounding_box;
pub mod interval;

pub use bounding_box::{BoundingBox, Offset, ProvidesBoxes, ProvidesSegments, Segment};
pub use interval::Interval;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// One of the two layout axes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Side of an axis
///
/// `Down` doubles as LEFT and `Up` as RIGHT when the axis is horizontal.
/// Serialized as `-1` / `1`.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    Down = -1,
    Up = 1,
}

impl Direction {
    pub const LEFT: Direction = Direction::Down;
    pub const RIGHT: Direction = Direction::Up;

    /// `-1.0` for Down/Left, `1.0` for Up/Right
    pub fn sign(self) -> f64 {
        match self {
            Direction::Down => -1.0,
            Direction::Up => 1.0,
        }
    }

    pub fn flip(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Both directions, Down first
    pub fn both() -> [Direction; 2] {
        [Direction::Down, Direction::Up]
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        self.flip()
    }
}
