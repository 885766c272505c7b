//! Ship definitions: a straight line of cells that tracks its remaining health.

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run along the row, column increasing.
    Horizontal,
    /// Cells run down the column, row increasing.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Damage state of a ship. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipStatus {
    Intact,
    Damaged,
    Sunk,
}

/// A ship anchored at its bow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds are checked when the ship is placed.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            health: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        // lengths past i32::MAX would wrap; they could never fit a board anyway
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether `shot` lands on one of the ship's cells.
    pub fn is_hit_by(&self, shot: Coordinate) -> bool {
        self.cells().any(|c| c == shot)
    }

    /// Take one point of damage. Returns `true` if this sank the ship.
    ///
    /// The board guarantees a cell is never hit twice.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn status(&self) -> ShipStatus {
        if self.health == 0 {
            ShipStatus::Sunk
        } else if self.health < self.length {
            ShipStatus::Damaged
        } else {
            ShipStatus::Intact
        }
    }
}
