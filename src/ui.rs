#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::common::ShotOutcome;
use crate::game::{Game, Side, TurnReport};
use crate::player::Player;

const RULE: &str = "--------------------";

/// Announcement shown after a shot lands.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship hit!",
        ShotOutcome::Sunk => "Ship destroyed!",
    }
}

pub fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Computer => "Computer",
    }
}

/// Print both boards, the player's first.
pub fn print_boards<P: Player, C: Player, W: Write>(out: &mut W, game: &Game<P, C>) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Player board:")?;
    writeln!(out, "{}", game.player_board())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Computer board:")?;
    writeln!(out, "{}", game.computer_board())
}

/// Print who is about to move.
pub fn print_turn_banner<W: Write>(out: &mut W, side: Side) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{} to move!", side_label(side))
}

/// Print a shot, 1-based as players type it.
pub fn print_report<W: Write>(out: &mut W, report: &TurnReport) -> io::Result<()> {
    writeln!(
        out,
        "{} move: {} {}",
        side_label(report.side),
        report.target.row + 1,
        report.target.col + 1
    )?;
    writeln!(out, "{}", outcome_message(report.outcome))
}

pub fn print_winner<W: Write>(out: &mut W, winner: Side) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{} wins!", side_label(winner))
}
