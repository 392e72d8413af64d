//! Commonly used types and utilities for ease of import.

pub use crate::{
    AutomatedPlayer, Coordinate, Grid, GridError, MatchController, MatchState, Orientation,
    Player, ShotOutcome, Side, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{render_grids, ConsoleReporter, HumanPlayer};
