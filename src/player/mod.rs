//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AutomatedPlayer: fires at uniformly random cells
//! - HumanPlayer: reads targets from a line-oriented input

use alloc::string::String;
use core::fmt;
use log::debug;
use rand::rngs::SmallRng;

use crate::common::{Coordinate, ShotOutcome};
use crate::game::Side;
use crate::grid::Grid;
use crate::report::{MatchEvent, Reporter};

/// Failure to obtain a target at all. Bad targets are not errors here; the
/// opponent grid rejects them and the player is asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The input stream ended.
    InputClosed,
    /// Reading input failed.
    Input(String),
    /// The opponent grid has no cells to aim at.
    NoTargets,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "Input closed before a target was entered"),
            PlayerError::Input(msg) => write!(f, "Failed to read input: {}", msg),
            PlayerError::NoTargets => write!(f, "Opponent grid has no cells to aim at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next aim point on a `size`×`size` opponent grid.
    ///
    /// Must not assume the point is legal; the opponent grid decides.
    fn select_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, PlayerError>;

    /// Fire at `opponent` until a shot is accepted.
    ///
    /// Out-of-bounds and repeated targets are reported and the player picks
    /// again; this loop never gives up on its own.
    fn take_turn(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        opponent: &mut Grid,
        reporter: &mut dyn Reporter,
    ) -> Result<ShotOutcome, PlayerError> {
        loop {
            let target = self.select_target(rng, opponent.size())?;
            reporter.report(&MatchEvent::TargetChosen { side, target });
            match opponent.resolve_shot(target) {
                Ok(outcome) => {
                    reporter.report(&MatchEvent::ShotResolved {
                        side,
                        target,
                        outcome,
                    });
                    return Ok(outcome);
                }
                Err(error) => {
                    debug!("{:?} target {:?} rejected: {:?}", side, target, error);
                    reporter.report(&MatchEvent::ShotRejected {
                        side,
                        target,
                        error,
                    });
                }
            }
        }
    }
}

pub mod ai;
pub use ai::AutomatedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, HumanPlayer, TargetParseError};
