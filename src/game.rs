//! Turn driver: alternates two players firing at each other's boards.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{FleetError, ShotOutcome};
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::player::Player;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened during one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Targets refused by the board before this one was accepted.
    pub rejected: usize,
}

/// Ask `shooter` for targets until `board` accepts one.
fn fire<P: Player + ?Sized>(
    shooter: &mut P,
    board: &mut Board,
    rng: &mut SmallRng,
) -> anyhow::Result<(Coordinate, ShotOutcome, usize)> {
    let mut rejected = 0;
    loop {
        let target = shooter.select_target(rng, board.dimension())?;
        match board.shoot(target) {
            Ok(outcome) => {
                shooter.handle_outcome(target, outcome);
                return Ok((target, outcome, rejected));
            }
            Err(e) => {
                shooter.handle_shot_error(target, e);
                rejected += 1;
            }
        }
    }
}

/// A game session: both players, both boards, and whose move it is.
///
/// The player moves first. The computer's board is hidden.
pub struct Game<P, C> {
    config: GameConfig,
    player: P,
    computer: C,
    player_board: Board,
    computer_board: Board,
    to_move: Side,
    shots: [usize; 2],
    rng: SmallRng,
}

impl<P: Player, C: Player> Game<P, C> {
    /// Set up random fleets for both sides.
    pub fn new(
        config: GameConfig,
        player: P,
        computer: C,
        mut rng: SmallRng,
    ) -> Result<Self, FleetError> {
        let placer = config.placer()?;
        let player_board = placer.create_random_board(&mut rng);
        let mut computer_board = placer.create_random_board(&mut rng);
        computer_board.set_hidden(true);
        Ok(Self::with_boards(config, player, computer, player_board, computer_board, rng))
    }

    /// Start from prepared boards. `player_board` is the one the computer
    /// fires at.
    pub fn with_boards(
        config: GameConfig,
        player: P,
        computer: C,
        player_board: Board,
        computer_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            config,
            player,
            computer,
            player_board,
            computer_board,
            to_move: Side::Player,
            shots: [0; 2],
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn computer(&self) -> &C {
        &self.computer
    }

    /// Board owned by the player, fired at by the computer.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// Board owned by the computer, fired at by the player.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Computer => &self.computer_board,
        }
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side as usize]
    }

    /// A side wins once every ship of the other side is sunk.
    pub fn status(&self) -> GameStatus {
        let fleet = self.config.fleet_size();
        if self.computer_board.sunk_count() >= fleet {
            GameStatus::Won(Side::Player)
        } else if self.player_board.sunk_count() >= fleet {
            GameStatus::Won(Side::Computer)
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the side to move fire one accepted shot. A miss passes the move to
    /// the other side; a hit or sink keeps it.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        if let GameStatus::Won(side) = self.status() {
            anyhow::bail!("game is already won by {:?}", side);
        }
        let side = self.to_move;
        let (target, outcome, rejected) = match side {
            Side::Player => fire(&mut self.player, &mut self.computer_board, &mut self.rng)?,
            Side::Computer => fire(&mut self.computer, &mut self.player_board, &mut self.rng)?,
        };
        self.shots[side as usize] += 1;
        if !outcome.grants_extra_turn() {
            self.to_move = side.opponent();
        }
        debug!("{:?} fired at {}: {:?}", side, target, outcome);
        Ok(TurnReport {
            side,
            target,
            outcome,
            rejected,
        })
    }

    /// Play until one side wins, handing every report to `observe`.
    pub fn run<F>(&mut self, mut observe: F) -> anyhow::Result<Side>
    where
        F: FnMut(&Self, &TurnReport),
    {
        loop {
            if let GameStatus::Won(side) = self.status() {
                return Ok(side);
            }
            let report = self.play_turn()?;
            observe(self, &report);
        }
    }
}
