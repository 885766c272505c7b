#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::common::ShootError;
use crate::coordinate::Coordinate;

use super::Player;

/// Why a typed move could not be read as a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputError {
    WrongCount,
    NotNumbers,
}

impl fmt::Display for MoveInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveInputError::WrongCount => write!(f, "Enter 2 coordinates!"),
            MoveInputError::NotNumbers => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for MoveInputError {}

fn parse_index(token: &str) -> Option<i32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // digits only, so the sole failure is overflow: clamp and let the board
    // report it as off the grid
    let value = token.parse::<i64>().unwrap_or(i64::MAX).min(i32::MAX as i64) as i32;
    Some(value - 1)
}

/// Parse "row col" (1-based) into a 0-based coordinate.
///
/// Range is not checked here; `0 3` becomes (-1, 2) and the board rejects it.
pub fn parse_move(line: &str) -> Result<Coordinate, MoveInputError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = parts.as_slice() else {
        return Err(MoveInputError::WrongCount);
    };
    match (parse_index(row), parse_index(col)) {
        (Some(r), Some(c)) => Ok(Coordinate::new(r, c)),
        _ => Err(MoveInputError::NotNumbers),
    }
}

/// Human player typing moves on a terminal (or any reader/writer pair).
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print how moves are entered.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.output, "Input format: x y")?;
        writeln!(self.output, "x - row number")?;
        writeln!(self.output, "y - column number")
    }

    /// Give back the writer, e.g. to inspect captured prompts.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _dimension: usize,
    ) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed");
            }
            match parse_move(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_shot_error(&mut self, _target: Coordinate, err: ShootError) {
        let _ = writeln!(self.output, "{}", err);
    }
}
