//! Vessels: straight runs of cells anchored at a bow.

use core::fmt;

use crate::common::{Coordinate, GridError};

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run along the row, increasing column.
    Horizontal,
    /// Cells run down the column, increasing row.
    Vertical,
}

impl Orientation {
    /// Step applied between consecutive cells as (row, col).
    const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel of fixed length laid out from its bow.
///
/// Only `lives` changes after construction; the grid decrements it through
/// [`register_hit`](Vessel::register_hit) once a shot is confirmed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Vessel {
    /// Build a vessel at `bow`. Bounds are checked when the vessel is placed
    /// on a grid, not here.
    ///
    /// The length must be at least 1 and fit an `i32` axis.
    pub fn new(
        bow: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GridError> {
        if length == 0 {
            return Err(GridError::EmptyVessel);
        }
        if i32::try_from(length).is_err() {
            return Err(GridError::VesselTooLong);
        }
        Ok(Vessel {
            bow,
            length,
            orientation,
            lives: length,
        })
    }

    /// Cells occupied by the vessel, starting at the bow.
    ///
    /// Each call yields a fresh iterator.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + Clone {
        let bow = self.bow;
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Returns `true` if `target` is one of the vessel's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Take one point of damage. Extra hits on a sunk vessel are ignored.
    pub fn register_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Check if the vessel has no lives left.
    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points.
    pub fn lives(&self) -> usize {
        self.lives
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives,
        )
    }
}
