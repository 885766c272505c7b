#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod player;
mod render;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{format_line, init_logging, init_logging_with, parse_level, short_target};
pub use placement::{create_random_board, FleetPlacer};
pub use player::*;
pub use render::cell_symbol;
pub use ship::*;
