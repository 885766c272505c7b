//! Game board state: grid cells, placed ships, and the cells that can no
//! longer take a ship or a shot.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::common::{InvalidShip, ShootError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never fired upon.
    Empty,
    /// Part of a ship, never fired upon.
    Ship,
    /// Ship cell that was hit.
    Hit,
    /// Water cell that was fired upon.
    Miss,
    /// Water next to a sunk ship, shown even on a hidden board.
    Revealed,
}

impl Cell {
    /// Whether the cell has been fired upon or revealed.
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss | Cell::Revealed)
    }
}

/// An N×N board owned by one player and shot at by the other.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    hidden: bool,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    /// Ship cells and their contours, only meaningful while placing.
    exclusions: BTreeSet<Coordinate>,
    /// Shot targets and cells revealed around sunk ships.
    shots: BTreeSet<Coordinate>,
    sunk_count: usize,
}

impl Board {
    /// Create an empty board with no ships.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            hidden: false,
            grid: vec![Cell::Empty; dimension * dimension],
            ships: Vec::new(),
            exclusions: BTreeSet::new(),
            shots: BTreeSet::new(),
            sunk_count: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Whether ship cells are masked when rendering.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        let n = self.dimension as i64;
        (0..n).contains(&(c.row as i64)) && (0..n).contains(&(c.col as i64))
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        if self.in_bounds(c) {
            Some(c.row as usize * self.dimension + c.col as usize)
        } else {
            None
        }
    }

    /// State of the cell at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|i| self.grid[i])
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, and a zero-sized board has no rows anyway
        self.grid.chunks(self.dimension.max(1))
    }

    fn mark(&mut self, c: Coordinate, cell: Cell) {
        if let Some(i) = self.index(c) {
            self.grid[i] = cell;
        }
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Whether `c` is excluded from placement or already fired upon.
    pub fn is_used(&self, c: Coordinate) -> bool {
        self.exclusions.contains(&c) || self.shots.contains(&c)
    }

    /// Place `ship`, rejecting it without side effects if any cell is off the
    /// board, taken, or touching another ship.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), InvalidShip> {
        if ship.length() == 0 {
            return Err(InvalidShip::ZeroLength);
        }
        for c in ship.cells() {
            if !self.in_bounds(c) {
                return Err(InvalidShip::OutOfBounds(c));
            }
            if self.is_used(c) {
                return Err(InvalidShip::Blocked(c));
            }
        }

        let cells: Vec<Coordinate> = ship.cells().collect();
        for &c in &cells {
            self.mark(c, Cell::Ship);
            self.exclusions.insert(c);
        }
        trace!("placed ship of length {} at {}", ship.length(), ship.bow());
        self.ships.push(ship);
        self.contour(&cells, false);
        Ok(())
    }

    /// Mark the 8-neighbourhood of `cells` as used. With `reveal`, newly
    /// covered cells are also shown as open water.
    fn contour(&mut self, cells: &[Coordinate], reveal: bool) {
        for &cell in cells {
            for n in cell.neighbourhood() {
                if !self.in_bounds(n) || self.is_used(n) {
                    continue;
                }
                if reveal {
                    self.mark(n, Cell::Revealed);
                    self.shots.insert(n);
                } else {
                    self.exclusions.insert(n);
                }
            }
        }
    }

    /// Forget every used cell while keeping the grid and ships.
    ///
    /// Called once after the fleet is placed so placement exclusions do not
    /// block shots.
    pub fn reset_exclusions(&mut self) {
        self.exclusions.clear();
        self.shots.clear();
    }

    /// Fire at `target`.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShootError> {
        if !self.in_bounds(target) {
            return Err(ShootError::OutOfBounds(target));
        }
        if self.is_used(target) {
            return Err(ShootError::AlreadyShot(target));
        }
        self.shots.insert(target);

        let Some(idx) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.mark(target, Cell::Miss);
            debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.mark(target, Cell::Hit);
        if !self.ships[idx].take_hit() {
            debug!("shot at {} hit a ship", target);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk_count += 1;
        let cells: Vec<Coordinate> = self.ships[idx].cells().collect();
        self.contour(&cells, true);
        debug!(
            "shot at {} sank a ship of length {} ({} sunk)",
            target,
            cells.len(),
            self.sunk_count
        );
        Ok(ShotOutcome::Sunk)
    }
}
