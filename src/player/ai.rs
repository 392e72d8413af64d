use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use super::{Player, PlayerError};
use crate::common::Coordinate;

/// Automated opponent that fires at uniformly random cells.
///
/// It keeps no shot history; repeats are rejected by the grid and simply
/// cost another draw.
#[derive(Debug, Default)]
pub struct AutomatedPlayer;

impl AutomatedPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AutomatedPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, PlayerError> {
        let n = i32::try_from(size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(PlayerError::NoTargets)?;
        let target = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
        debug!("automated player aims at {:?}", target);
        Ok(target)
    }
}
