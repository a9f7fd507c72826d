use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the square grid, addressed by (row, column).
///
/// Signed so that coordinates outside the grid can still be expressed;
/// the search accepts them and simply never reaches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Flat index into a `size × size` row-major table, or `None` when out of range.
    pub fn index(&self, size: usize) -> Option<usize> {
        if self.in_bounds(size) {
            Some(self.row as usize * size + self.col as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }

    pub fn manhattan(&self, other: &Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl From<[i32; 2]> for Coord {
    fn from(v: [i32; 2]) -> Self {
        Coord::new(v[0], v[1])
    }
}

impl From<Coord> for [i32; 2] {
    fn from(c: Coord) -> Self {
        [c.row, c.col]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Snapshot of a finished search, suitable for emitting as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSummary {
    pub path: Vec<Coord>,
    pub cost: f32,
    pub search_size: u64,
    pub found: bool,
    /// Whether the last coordinate of `path` is the configured end.
    pub reached_end: bool,
}
