//! Common types for the sea battle: coordinates, shot outcomes and grid errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A position on a grid, zero-based.
///
/// Axes are signed so that neighbour offsets and user input converted from
/// 1-based numbering can step off the grid; the grid decides what is in
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate shifted by (`dr`, `dc`), saturating at the `i32` limits.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }
}

impl fmt::Display for Coordinate {
    /// Formats the coordinate the way players type it: 1-based `row col`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Struck a vessel that is still afloat.
    Hit,
    /// Struck the last intact cell of a vessel.
    Sunk,
    /// Landed in open water.
    Miss,
}

impl ShotOutcome {
    /// A hit that did not sink anything earns the shooter another move.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Hit! The vessel is damaged"),
            ShotOutcome::Sunk => write!(f, "Sunk! The vessel is destroyed"),
            ShotOutcome::Miss => write!(f, "Miss"),
        }
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot, or lies in the revealed ring of a wreck.
    AlreadyTargeted,
    /// Vessel leaves the grid, overlaps or touches another vessel.
    InvalidPlacement,
    /// Vessels need at least one cell.
    EmptyVessel,
    /// Vessel length exceeds what a coordinate axis can address.
    VesselTooLong,
    /// Grids need at least one row and one column.
    EmptyGrid,
    /// The requested fleet cannot be laid out on this grid.
    FleetDoesNotFit,
    /// Underlying bitboard error (e.g. grid too large).
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoard(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds => write!(f, "You are trying to shoot off the board"),
            GridError::AlreadyTargeted => write!(f, "That cell has already been targeted"),
            GridError::InvalidPlacement => write!(f, "Vessel does not fit at that position"),
            GridError::EmptyVessel => write!(f, "Vessel length must be at least 1"),
            GridError::VesselTooLong => write!(f, "Vessel length is too large"),
            GridError::EmptyGrid => write!(f, "Grid size must be at least 1"),
            GridError::FleetDoesNotFit => write!(f, "Unable to lay out the fleet on this grid"),
            GridError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
