use serde::{Deserialize, Serialize};

/// A single `(x, y)` cell on the grid. Origin is top-left; `x` increases
/// rightward, `y` increases downward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step by `(dx, dy)`, returning `None` if the result would have a
    /// negative coordinate.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Position> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if x < 0 || y < 0 {
            None
        } else {
            Some(Position {
                x: x as usize,
                y: y as usize,
            })
        }
    }

    pub fn as_array(self) -> [usize; 2] {
        [self.x, self.y]
    }
}
