#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
mod report;
#[cfg(feature = "std")]
mod ui;
mod vessel;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use fleet::{generate_fleet, random_vessel};
pub use game::*;
pub use grid::{CellState, Grid};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{AutomatedPlayer, Player, PlayerError};
#[cfg(feature = "std")]
pub use player::{parse_target, HumanPlayer, TargetParseError};
pub use report::*;
#[cfg(feature = "std")]
pub use ui::*;
pub use vessel::{Orientation, Vessel};
