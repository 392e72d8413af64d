#![cfg(feature = "std")]

use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::common::Coordinate;
use crate::game::{MatchState, Side};
use crate::grid::{CellState, Grid};
use crate::report::{MatchEvent, Reporter};

const GAP: &str = "        ";

fn glyph(state: CellState) -> char {
    match state {
        CellState::Water => 'O',
        CellState::Vessel => '■',
        CellState::Hit => 'X',
        CellState::Miss => 'T',
        CellState::Blocked => '.',
    }
}

fn write_header(out: &mut String, size: usize) -> fmt::Result {
    out.push_str("  |");
    for c in 0..size {
        write!(out, " {} |", c + 1)?;
    }
    Ok(())
}

fn write_row(out: &mut String, grid: &Grid, r: usize) -> fmt::Result {
    write!(out, "{} |", r + 1)?;
    for c in 0..grid.size() {
        let state = grid.cell_state(Coordinate::new(r as i32, c as i32));
        write!(out, " {} |", glyph(state))?;
    }
    Ok(())
}

fn write_grids(out: &mut String, user: &Grid, automated: &Grid) -> fmt::Result {
    let mut left = String::new();
    write_header(&mut left, user.size())?;
    let width = left.chars().count();
    writeln!(out, "{:<width$}{}{}", "Your board:", GAP, "Opponent board:")?;
    write!(out, "{}{}", left, GAP)?;
    write_header(out, automated.size())?;
    writeln!(out)?;
    for r in 0..user.size().max(automated.size()) {
        left.clear();
        if r < user.size() {
            write_row(&mut left, user, r)?;
        }
        write!(out, "{:<width$}{}", left, GAP)?;
        if r < automated.size() {
            write_row(out, automated, r)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render both grids side by side, user on the left. Concealed grids show
/// their intact vessels as water.
pub fn render_grids(user: &Grid, automated: &Grid) -> String {
    let mut out = String::new();
    if write_grids(&mut out, user, automated).is_err() {
        log::error!("failed to render grids");
    }
    out
}

/// Print the greeting banner with the input format.
pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "-------------------")?;
    writeln!(out, "    Welcome to     ")?;
    writeln!(out, "    SEA  BATTLE    ")?;
    writeln!(out, "-------------------")?;
    writeln!(out, " input format: x y ")?;
    writeln!(out, " x - row number    ")?;
    writeln!(out, " y - column number ")?;
    Ok(())
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::User => "User",
        Side::Automated => "Computer",
    }
}

/// Console output collaborator: prints status lines and boards, and pauses
/// before automated moves so a human can follow the game.
pub struct ConsoleReporter<W: Write> {
    out: W,
    pace: Duration,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(pace: Duration) -> Self {
        Self::new(io::stdout(), pace)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, pace: Duration) -> Self {
        Self { out, pace }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &MatchEvent<'_>) -> io::Result<()> {
        match *event {
            MatchEvent::TurnStarted {
                side,
                user_grid,
                automated_grid,
                ..
            } => {
                writeln!(self.out, "{}", "-".repeat(20))?;
                write!(self.out, "{}", render_grids(user_grid, automated_grid))?;
                writeln!(self.out, "{}", "-".repeat(20))?;
                writeln!(self.out, "{} to move!", side_label(side))?;
                self.out.flush()?;
                if side == Side::Automated && !self.pace.is_zero() {
                    thread::sleep(self.pace);
                }
            }
            MatchEvent::TargetChosen { side, target } => {
                if side == Side::Automated {
                    writeln!(self.out, "Computer fires at: {}", target)?;
                }
            }
            MatchEvent::ShotResolved { outcome, .. } => {
                writeln!(self.out, "{}", outcome)?;
            }
            MatchEvent::ShotRejected { error, .. } => {
                writeln!(self.out, "{}", error)?;
            }
            MatchEvent::Finished {
                state,
                user_grid,
                automated_grid,
            } => {
                write!(self.out, "{}", render_grids(user_grid, automated_grid))?;
                writeln!(self.out, "{}", "-".repeat(20))?;
                match state {
                    MatchState::UserWon => writeln!(self.out, "User wins!")?,
                    MatchState::AutomatedWon => writeln!(self.out, "Computer wins!")?,
                    _ => {}
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &MatchEvent<'_>) {
        if let Err(e) = self.write_event(event) {
            log::warn!("console output failed: {}", e);
        }
    }
}
