use serde::{Deserialize, Serialize};

/// The axis a word runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The per-step `(dx, dy)` when walking a run in this orientation.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// The orientation perpendicular to this one.
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Single-letter code used in the puzzle document (`"h"` / `"v"`).
    pub fn code(self) -> &'static str {
        match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        }
    }
}

/// The four compass directions used when walking a run outward from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The negative/positive direction pair along an orientation's axis.
    pub fn axis(orientation: Orientation) -> (Direction, Direction) {
        match orientation {
            Orientation::Horizontal => (Direction::Left, Direction::Right),
            Orientation::Vertical => (Direction::Up, Direction::Down),
        }
    }
}
