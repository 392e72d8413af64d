//! Match events and the sinks that observe them.

use crate::common::{Coordinate, GridError, ShotOutcome};
use crate::game::{MatchState, Side};
use crate::grid::Grid;

/// Something that happened during a match, in the order it happened.
#[derive(Debug, Clone, Copy)]
pub enum MatchEvent<'a> {
    /// `side` is about to move. Grids are shown as they stand.
    TurnStarted {
        side: Side,
        turn: u32,
        user_grid: &'a Grid,
        automated_grid: &'a Grid,
    },
    /// `side` aimed at `target`.
    TargetChosen { side: Side, target: Coordinate },
    /// The opponent grid accepted the shot.
    ShotResolved {
        side: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// The opponent grid refused the shot; `side` aims again.
    ShotRejected {
        side: Side,
        target: Coordinate,
        error: GridError,
    },
    /// The match reached a terminal state.
    Finished {
        state: MatchState,
        user_grid: &'a Grid,
        automated_grid: &'a Grid,
    },
}

/// Output collaborator. Purely observational: nothing it does feeds back
/// into the match.
pub trait Reporter {
    fn report(&mut self, event: &MatchEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: &MatchEvent<'_>) {}
}
