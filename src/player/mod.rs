//! Player trait and implementations
//!
//! A player only chooses where to shoot; the board decides what happens.
//! - AiPlayer: uniform random targets
//! - CliPlayer: coordinates typed on a terminal

use rand::rngs::SmallRng;

use crate::common::{ShootError, ShotOutcome};
use crate::coordinate::Coordinate;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next target on an enemy board of size `dimension`.
    ///
    /// An error ends the game, e.g. when interactive input is closed.
    fn select_target(&mut self, rng: &mut SmallRng, dimension: usize)
        -> anyhow::Result<Coordinate>;

    /// The last target was rejected; another will be requested.
    fn handle_shot_error(&mut self, _target: Coordinate, _err: ShootError) {}

    /// The last target was accepted by the enemy board.
    fn handle_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_move, CliPlayer, MoveInputError};
