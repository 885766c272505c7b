use alloc::vec::Vec;

use crate::common::FleetError;
use crate::placement::FleetPlacer;

pub const BOARD_SIZE: usize = 6;
/// Largest board side accepted by the placer.
pub const MAX_BOARD_SIZE: usize = 99;
pub const FLEET_SIZE: usize = 7;
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed per board before it is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Board and fleet settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dimension: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a board of the given size.
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// Sinks needed to win.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    pub fn placer(&self) -> Result<FleetPlacer, FleetError> {
        Ok(FleetPlacer::new(&self.fleet, self.dimension)?
            .with_max_attempts(self.max_placement_attempts))
    }
}
