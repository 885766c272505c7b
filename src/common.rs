//! Common types for the board: shot outcomes and board errors.

use crate::coordinate::Coordinate;

/// Result of a successful shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot took the last health point of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter moves again after this shot.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Why a ship was refused by [`crate::Board::add_ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidShip {
    /// A ship cell lies off the board.
    OutOfBounds(Coordinate),
    /// A ship cell overlaps or touches an existing ship.
    Blocked(Coordinate),
    /// Ships need at least one cell.
    ZeroLength,
}

/// Errors returned by [`crate::Board::shoot`]. Both are retryable and do not
/// consume a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootError {
    /// Target lies outside the grid.
    OutOfBounds(Coordinate),
    /// Target was already fired upon or revealed.
    AlreadyShot(Coordinate),
}

/// Fleet compositions that can never be placed on the requested board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Boards need at least one row.
    EmptyBoard,
    /// No ship lengths were given.
    EmptyFleet,
    /// Boards are capped so cell indices stay in range.
    BoardTooLarge { dimension: usize, max: usize },
    /// A ship of this length does not fit on the board.
    ShipDoesNotFit { length: usize, dimension: usize },
    /// The ships and their mandatory gaps need more room than the board has.
    FleetTooLarge { footprint: usize, capacity: usize },
}

impl core::fmt::Display for InvalidShip {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidShip::OutOfBounds(c) => write!(f, "ship cell {} is off the board", c),
            InvalidShip::Blocked(c) => write!(f, "ship cell {} touches another ship", c),
            InvalidShip::ZeroLength => write!(f, "ship has no cells"),
        }
    }
}

impl core::fmt::Display for ShootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShootError::OutOfBounds(_) => write!(f, "You are trying to shoot off the board!"),
            ShootError::AlreadyShot(_) => write!(f, "You have already fired at this cell"),
        }
    }
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::EmptyBoard => write!(f, "board dimension must be at least 1"),
            FleetError::EmptyFleet => write!(f, "fleet has no ships"),
            FleetError::BoardTooLarge { dimension, max } => {
                write!(f, "board dimension {} exceeds the maximum of {}", dimension, max)
            }
            FleetError::FleetTooLarge { footprint, capacity } => write!(
                f,
                "fleet needs room for {} cells but the board only offers {}",
                footprint, capacity
            ),
            FleetError::ShipDoesNotFit { length, dimension } => write!(
                f,
                "ship of length {} does not fit on a {}x{} board",
                length, dimension, dimension
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidShip {}
#[cfg(feature = "std")]
impl std::error::Error for ShootError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
