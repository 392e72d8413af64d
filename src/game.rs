//! Match controller: alternates turns and detects the end of the match.

use alloc::boxed::Box;
use log::info;
use rand::rngs::SmallRng;

use crate::common::ShotOutcome;
use crate::grid::Grid;
use crate::player::{Player, PlayerError};
use crate::report::{MatchEvent, Reporter};

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    User,
    Automated,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::User => Side::Automated,
            Side::Automated => Side::User,
        }
    }
}

/// Turn state machine. `UserWon` and `AutomatedWon` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    UserTurn,
    AutomatedTurn,
    UserWon,
    AutomatedWon,
}

impl MatchState {
    /// Side to move, or `None` once the match is over.
    pub fn active_side(self) -> Option<Side> {
        match self {
            MatchState::UserTurn => Some(Side::User),
            MatchState::AutomatedTurn => Some(Side::Automated),
            MatchState::UserWon | MatchState::AutomatedWon => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.active_side().is_none()
    }

    /// Winning side of a terminal state.
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::UserWon => Some(Side::User),
            MatchState::AutomatedWon => Some(Side::Automated),
            _ => None,
        }
    }

    fn turn_of(side: Side) -> MatchState {
        match side {
            Side::User => MatchState::UserTurn,
            Side::Automated => MatchState::AutomatedTurn,
        }
    }

    /// State after the active side's shot produced `outcome`.
    ///
    /// Defeat is checked on the automated grid first. A plain hit keeps the
    /// same side on move; a miss or a sinking passes the move.
    pub fn after_move(
        self,
        outcome: ShotOutcome,
        user_defeated: bool,
        automated_defeated: bool,
    ) -> MatchState {
        let Some(side) = self.active_side() else {
            return self;
        };
        if automated_defeated {
            MatchState::UserWon
        } else if user_defeated {
            MatchState::AutomatedWon
        } else if outcome.grants_extra_turn() {
            self
        } else {
            MatchState::turn_of(side.other())
        }
    }
}

/// Final tally of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub turns: u32,
    pub user_shots: usize,
    pub automated_shots: usize,
}

/// Drives a match between a user-side and an automated-side player.
///
/// Each side's grid holds its own fleet; a side fires at the other side's
/// grid.
pub struct MatchController {
    user: Box<dyn Player>,
    automated: Box<dyn Player>,
    user_grid: Grid,
    automated_grid: Grid,
    rng: SmallRng,
    state: MatchState,
    turn: u32,
}

impl MatchController {
    pub fn new(
        user: Box<dyn Player>,
        user_grid: Grid,
        automated: Box<dyn Player>,
        automated_grid: Grid,
        rng: SmallRng,
    ) -> Self {
        Self {
            user,
            automated,
            user_grid,
            automated_grid,
            rng,
            state: MatchState::UserTurn,
            turn: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Moves played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn user_grid(&self) -> &Grid {
        &self.user_grid
    }

    pub fn automated_grid(&self) -> &Grid {
        &self.automated_grid
    }

    /// Play one move of the active side. Does nothing once the match is over.
    pub fn step(&mut self, reporter: &mut dyn Reporter) -> Result<MatchState, PlayerError> {
        let Some(side) = self.state.active_side() else {
            return Ok(self.state);
        };
        reporter.report(&MatchEvent::TurnStarted {
            side,
            turn: self.turn,
            user_grid: &self.user_grid,
            automated_grid: &self.automated_grid,
        });

        let (player, target_grid) = match side {
            Side::User => (&mut self.user, &mut self.automated_grid),
            Side::Automated => (&mut self.automated, &mut self.user_grid),
        };
        let outcome = player.take_turn(side, &mut self.rng, target_grid, reporter)?;
        self.turn += 1;

        self.state = self.state.after_move(
            outcome,
            self.user_grid.is_defeated(),
            self.automated_grid.is_defeated(),
        );
        if self.state.is_terminal() {
            info!("match over after {} moves: {:?}", self.turn, self.state);
            reporter.report(&MatchEvent::Finished {
                state: self.state,
                user_grid: &self.user_grid,
                automated_grid: &self.automated_grid,
            });
        }
        Ok(self.state)
    }

    /// Play until one fleet is destroyed.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<MatchState, PlayerError> {
        while !self.state.is_terminal() {
            self.step(reporter)?;
        }
        Ok(self.state)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: self.state.winner(),
            turns: self.turn,
            user_shots: self.automated_grid.shot_count(),
            automated_shots: self.user_grid.shot_count(),
        }
    }
}
