//! Random fleet layout by rejection sampling.

use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{Coordinate, GridError};
use crate::config::MAX_FLEET_RESTARTS;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Sample a random vessel of `length` anywhere on or just past the grid.
///
/// Bows are drawn from `[0, size]` on both axes; candidates that do not fit
/// are left for [`Grid::place_vessel`] to reject.
pub fn random_vessel<R: Rng>(
    rng: &mut R,
    size: usize,
    length: usize,
) -> Result<Vessel, GridError> {
    let n = size as i32;
    let bow = Coordinate::new(rng.random_range(0..=n), rng.random_range(0..=n));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(bow, length, orientation)
}

/// Place one vessel per entry of `lengths` onto `grid`, in order.
///
/// Every rejected candidate counts against `budget`, shared by the whole
/// fleet. Returns `Ok(false)` once the budget is spent; the grid is then
/// partially filled and should be thrown away.
pub fn generate_fleet<R: Rng>(
    rng: &mut R,
    grid: &mut Grid,
    lengths: &[usize],
    budget: usize,
) -> Result<bool, GridError> {
    let mut attempts = 0;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > budget {
                debug!("placement budget of {} exhausted", budget);
                return Ok(false);
            }
            let vessel = random_vessel(rng, grid.size(), length)?;
            match grid.place_vessel(vessel) {
                Ok(()) => break,
                Err(GridError::InvalidPlacement) => {
                    trace!("attempt {}: rejected {:?}", attempts, vessel);
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(true)
}

impl Grid {
    /// Build a `size`×`size` grid with a randomly laid out fleet, ready for
    /// battle.
    ///
    /// Generation restarts from an empty grid whenever the attempt budget
    /// runs out.
    pub fn random<R: Rng>(
        rng: &mut R,
        size: usize,
        lengths: &[usize],
        budget: usize,
    ) -> Result<Grid, GridError> {
        if lengths.iter().any(|&l| l == 0 || l > size) {
            return Err(GridError::FleetDoesNotFit);
        }
        for restart in 0..MAX_FLEET_RESTARTS {
            let mut grid = Grid::new(size)?;
            if generate_fleet(rng, &mut grid, lengths, budget)? {
                grid.reset_used_tracking();
                debug!("fleet {:?} laid out after {} restarts", lengths, restart);
                return Ok(grid);
            }
            warn!("fleet generation restart {}", restart + 1);
        }
        Err(GridError::FleetDoesNotFit)
    }
}
