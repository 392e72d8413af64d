//! One side's grid: vessel placement, exclusion zones and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::bitboard::BitBoard;
use crate::common::{Coordinate, GridError, ShotOutcome};
use crate::vessel::Vessel;

type Cells = BitBoard<u128>;

/// Neighbour offsets of the contour rule, the cell itself included.
const CONTOUR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// What a renderer should draw in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Open water, or a concealed vessel cell.
    Water,
    /// Intact vessel cell (never returned while concealed).
    Vessel,
    /// Vessel cell that has been shot.
    Hit,
    /// Water cell that has been shot.
    Miss,
    /// Cell marked as unavailable, e.g. the ring around a wreck.
    Blocked,
}

/// A square grid owning one side's fleet.
///
/// Two cell sets are kept apart: `reserved` holds every cell unavailable to
/// further placements (vessel cells plus their exclusion zones), and
/// `shots` plus `blocked` together hold every cell that may no longer be
/// fired at.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    vessels: Vec<Vessel>,
    occupied: Cells,
    reserved: Cells,
    shots: Cells,
    blocked: Cells,
    destroyed: usize,
    concealed: bool,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let empty = Cells::try_new(size)?;
        Ok(Grid {
            size,
            vessels: Vec::new(),
            occupied: empty,
            reserved: empty,
            shots: empty,
            blocked: empty,
            destroyed: 0,
            concealed: false,
        })
    }

    /// Largest grid dimension supported.
    pub fn max_size() -> usize {
        Cells::max_size()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    /// Number of cells fired at since the battle phase began.
    pub fn shot_count(&self) -> usize {
        self.shots.count_ones()
    }

    /// Whether vessel cells are hidden from renderers.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Returns `true` when either axis falls outside `[0, size)`.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_none()
    }

    fn index(&self, coord: Coordinate) -> Option<(usize, usize)> {
        let n = self.size as i32;
        if (0..n).contains(&coord.row) && (0..n).contains(&coord.col) {
            Some((coord.row as usize, coord.col as usize))
        } else {
            None
        }
    }

    /// Place `vessel`, reserving its cells and the ring around it.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GridError> {
        if vessel.length() > self.size {
            return Err(GridError::InvalidPlacement);
        }
        let mut cells = Vec::with_capacity(vessel.length());
        for coord in vessel.cells() {
            match self.index(coord) {
                Some((r, c)) if !self.reserved.contains(r, c) => cells.push((r, c)),
                _ => return Err(GridError::InvalidPlacement),
            }
        }
        for (r, c) in cells {
            self.occupied.set(r, c)?;
            self.reserved.set(r, c)?;
        }
        debug!("placed {:?}", vessel);
        self.vessels.push(vessel);
        self.apply_exclusion_zone(&vessel, false)
    }

    /// Mark the contour of `vessel`.
    ///
    /// With `mark_visible` unset the ring is only reserved against later
    /// placements. With it set, every in-bounds water cell of the ring that
    /// has not been fired at becomes a visible blocked cell and can no longer
    /// be targeted.
    pub fn apply_exclusion_zone(
        &mut self,
        vessel: &Vessel,
        mark_visible: bool,
    ) -> Result<(), GridError> {
        for cell in vessel.cells() {
            for (dr, dc) in CONTOUR {
                let Some((r, c)) = self.index(cell.offset(dr, dc)) else {
                    continue;
                };
                if mark_visible {
                    let taken = self.occupied.contains(r, c)
                        || self.shots.contains(r, c)
                        || self.blocked.contains(r, c);
                    if !taken {
                        self.blocked.set(r, c)?;
                    }
                } else {
                    self.reserved.set(r, c)?;
                }
            }
        }
        Ok(())
    }

    /// Fire at `target`.
    ///
    /// Bounds and duplicates are checked before hit-testing, so a repeated
    /// shot never damages a vessel twice.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, GridError> {
        let (r, c) = self.index(target).ok_or(GridError::OutOfBounds)?;
        if self.shots.contains(r, c) || self.blocked.contains(r, c) {
            return Err(GridError::AlreadyTargeted);
        }
        self.shots.set(r, c)?;

        let Some(vessel) = self.vessels.iter_mut().find(|v| v.is_hit_by(target)) else {
            debug!("shot at {:?}: miss", target);
            return Ok(ShotOutcome::Miss);
        };
        vessel.register_hit();
        if !vessel.is_sunk() {
            debug!("shot at {:?}: hit, {} lives left", target, vessel.lives());
            return Ok(ShotOutcome::Hit);
        }
        let wreck = *vessel;
        self.destroyed += 1;
        self.apply_exclusion_zone(&wreck, true)?;
        debug!(
            "shot at {:?}: sunk {:?} ({}/{} destroyed)",
            target,
            wreck,
            self.destroyed,
            self.vessels.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Returns `true` when every vessel on the grid has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.vessels.len()
    }

    /// Start the battle phase: forget every shot and visible mark.
    ///
    /// Placement reservations live in their own set and are unaffected.
    pub fn reset_used_tracking(&mut self) {
        self.shots.clear_all();
        self.blocked.clear_all();
    }

    /// Cells no longer available to new vessels.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.index(coord)
            .map(|(r, c)| self.reserved.contains(r, c))
            .unwrap_or(false)
    }

    /// Render state of `coord`, honouring concealment. Out-of-bounds cells
    /// read as water.
    pub fn cell_state(&self, coord: Coordinate) -> CellState {
        let Some((r, c)) = self.index(coord) else {
            return CellState::Water;
        };
        let occupied = self.occupied.contains(r, c);
        if self.shots.contains(r, c) {
            if occupied {
                CellState::Hit
            } else {
                CellState::Miss
            }
        } else if self.blocked.contains(r, c) {
            CellState::Blocked
        } else if occupied && !self.concealed {
            CellState::Vessel
        } else {
            CellState::Water
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("vessels", &self.vessels)
            .field("destroyed", &self.destroyed)
            .field("concealed", &self.concealed)
            .field("shots", &self.shots)
            .finish()
    }
}
