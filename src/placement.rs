//! Random fleet placement.
//!
//! Ships are dropped at random bows and orientations until the board accepts
//! them. All ships of one board share a single attempt budget; when it runs
//! out the board is thrown away and a fresh one is started.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::FleetError;
use crate::config::{MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Room needed by `lengths` against room offered by the board.
///
/// A ship of length L together with the gap below and to the right of it
/// covers a 2×(L+1) block of an (N+1)×(N+1) grid, and the blocks of
/// non-touching ships never overlap.
fn fleet_footprint(lengths: &[usize], dimension: usize) -> (usize, usize) {
    let needed = lengths.iter().map(|&l| 2 * (l + 1)).sum();
    (needed, (dimension + 1) * (dimension + 1))
}

/// Builds randomly populated boards for a fixed fleet.
#[derive(Debug, Clone)]
pub struct FleetPlacer {
    lengths: Vec<usize>,
    dimension: usize,
    max_attempts: usize,
}

impl FleetPlacer {
    /// Placer for `lengths` on a `dimension`×`dimension` board.
    ///
    /// Fails if the fleet is empty, some ship is longer than the board, or
    /// the fleet as a whole cannot fit.
    pub fn new(lengths: &[usize], dimension: usize) -> Result<Self, FleetError> {
        if dimension == 0 {
            return Err(FleetError::EmptyBoard);
        }
        if dimension > MAX_BOARD_SIZE {
            return Err(FleetError::BoardTooLarge {
                dimension,
                max: MAX_BOARD_SIZE,
            });
        }
        if lengths.is_empty() {
            return Err(FleetError::EmptyFleet);
        }
        if let Some(&length) = lengths.iter().find(|&&l| l == 0 || l > dimension) {
            return Err(FleetError::ShipDoesNotFit { length, dimension });
        }
        let (footprint, capacity) = fleet_footprint(lengths, dimension);
        if footprint > capacity {
            return Err(FleetError::FleetTooLarge {
                footprint,
                capacity,
            });
        }
        Ok(Self {
            lengths: lengths.to_vec(),
            dimension,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Override the per-board attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn random_ship<R: Rng>(&self, rng: &mut R, length: usize) -> Ship {
        let n = self.dimension as i32;
        let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Ship::new(bow, length, orientation)
    }

    /// One placement run. Returns `None` once the attempt ceiling is exceeded.
    ///
    /// The returned board still carries its placement exclusions.
    pub fn try_place<R: Rng>(&self, rng: &mut R) -> Option<Board> {
        let mut board = Board::new(self.dimension);
        let mut attempts = 0;
        for &length in &self.lengths {
            loop {
                attempts += 1;
                if attempts > self.max_attempts {
                    trace!("gave up after {} attempts", self.max_attempts);
                    return None;
                }
                let ship = self.random_ship(rng, length);
                match board.add_ship(ship) {
                    Ok(()) => break,
                    Err(e) => trace!("rejected candidate: {}", e),
                }
            }
        }
        Some(board)
    }

    /// Keep placing until a board succeeds, then clear its exclusions so it is
    /// ready for play.
    pub fn create_random_board<R: Rng>(&self, rng: &mut R) -> Board {
        let mut restarts = 0usize;
        loop {
            if let Some(mut board) = self.try_place(rng) {
                board.reset_exclusions();
                debug!(
                    "placed {} ships on a {}x{} board after {} restarts",
                    self.lengths.len(),
                    self.dimension,
                    self.dimension,
                    restarts
                );
                return board;
            }
            restarts += 1;
        }
    }
}

/// Build a ready-to-play board for `lengths` on a `dimension`×`dimension` grid.
pub fn create_random_board<R: Rng>(
    rng: &mut R,
    lengths: &[usize],
    dimension: usize,
) -> Result<Board, FleetError> {
    Ok(FleetPlacer::new(lengths, dimension)?.create_random_board(rng))
}
