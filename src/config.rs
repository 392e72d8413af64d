use core::time::Duration;

/// Side length of a grid when none is requested.
pub const DEFAULT_GRID_SIZE: usize = 6;

/// Vessel lengths each side places, in placement order.
pub const CANONICAL_FLEET: [usize; 6] = [3, 2, 2, 1, 1, 1];

/// Placement attempts allowed across a whole fleet before generation is
/// abandoned and restarted from an empty grid.
pub const PLACEMENT_ATTEMPT_BUDGET: usize = 5000;

/// Fresh grids tried before a fleet is declared impossible to lay out.
pub const MAX_FLEET_RESTARTS: usize = 1000;

/// Cosmetic pause before the automated side fires, in milliseconds.
pub const DEFAULT_PACE_MS: u64 = 3000;

/// Settings for a single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub grid_size: usize,
    pub fleet: &'static [usize],
    pub attempt_budget: usize,
    /// Fixed RNG seed for a reproducible match.
    pub seed: Option<u64>,
    /// Show the automated fleet on the console instead of concealing it.
    pub reveal_automated: bool,
    pub pace: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            grid_size: DEFAULT_GRID_SIZE,
            fleet: &CANONICAL_FLEET,
            attempt_budget: PLACEMENT_ATTEMPT_BUDGET,
            seed: None,
            reveal_automated: false,
            pace: Duration::from_millis(DEFAULT_PACE_MS),
        }
    }
}
