//! Grid positions.

use core::fmt;

/// A (row, col) position on a board.
///
/// Coordinates are plain values and may lie outside any board; bounds are
/// checked by [`crate::Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by (`d_row`, `d_col`), saturating at the `i32`
    /// limits. Saturated coordinates are far off any board.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// The 3×3 block centred on this coordinate, itself included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| self.offset(dr, dc)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
