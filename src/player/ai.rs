use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::ShootError;
use crate::coordinate::Coordinate;

use super::Player;

/// Computer player that fires at uniformly random cells.
///
/// Cells already fired upon are rejected by the board and simply resampled.
#[derive(Debug, Default)]
pub struct AiPlayer {
    rejected: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of targets the enemy board has refused so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        dimension: usize,
    ) -> anyhow::Result<Coordinate> {
        if dimension == 0 {
            anyhow::bail!("cannot aim at an empty board");
        }
        let n = dimension as i32;
        Ok(Coordinate::new(rng.random_range(0..n), rng.random_range(0..n)))
    }

    fn handle_shot_error(&mut self, target: Coordinate, err: ShootError) {
        trace!("computer target {} rejected: {}", target, err);
        self.rejected += 1;
    }
}
