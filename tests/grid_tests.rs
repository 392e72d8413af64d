use seabattle::{CellState, Coordinate, Grid, GridError, Orientation, ShotOutcome, Vessel};

fn at(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

fn vessel(row: i32, col: i32, length: usize, orientation: Orientation) -> Vessel {
    Vessel::new(at(row, col), length, orientation).unwrap()
}

#[test]
fn test_place_and_shoot_until_sunk() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal))
        .unwrap();
    grid.reset_used_tracking();

    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.vessels()[0].lives(), 2);

    // repeated shot triggers error and does not damage the vessel again
    assert_eq!(
        grid.resolve_shot(at(0, 0)).unwrap_err(),
        GridError::AlreadyTargeted
    );
    assert_eq!(grid.vessels()[0].lives(), 2);

    assert_eq!(grid.resolve_shot(at(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.vessels()[0].lives(), 1);
    assert!(!grid.is_defeated());

    assert_eq!(grid.resolve_shot(at(0, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(grid.destroyed(), 1);
    assert!(grid.is_defeated());
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(0, 0, 3, Orientation::Horizontal))
        .unwrap();

    // touches the bow-to-stern end at (0, 2)
    assert_eq!(
        grid.place_vessel(vessel(0, 3, 1, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    // diagonal contact counts too
    assert_eq!(
        grid.place_vessel(vessel(1, 3, 2, Orientation::Vertical))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    // overlap
    assert_eq!(
        grid.place_vessel(vessel(0, 1, 1, Orientation::Vertical))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    assert_eq!(grid.vessels().len(), 1);

    // one clear cell in between is fine
    grid.place_vessel(vessel(0, 4, 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(grid.vessels().len(), 2);
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut grid = Grid::new(6).unwrap();
    assert_eq!(
        grid.place_vessel(vessel(0, 4, 3, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    assert_eq!(
        grid.place_vessel(vessel(6, 0, 1, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    assert!(grid.vessels().is_empty());
    // a failed placement reserves nothing
    assert!(!grid.is_reserved(at(0, 4)));
    grid.place_vessel(vessel(3, 5, 3, Orientation::Vertical))
        .unwrap();
}

#[test]
fn test_out_of_bounds_shot() {
    let mut grid = Grid::new(6).unwrap();
    assert!(grid.is_out_of_bounds(at(6, 0)));
    assert!(grid.is_out_of_bounds(at(0, -1)));
    assert!(!grid.is_out_of_bounds(at(5, 5)));
    assert_eq!(grid.resolve_shot(at(6, 0)).unwrap_err(), GridError::OutOfBounds);
    assert_eq!(grid.resolve_shot(at(-1, 2)).unwrap_err(), GridError::OutOfBounds);
    assert_eq!(grid.shot_count(), 0);
}

#[test]
fn test_miss_and_duplicate_miss() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(0, 0, 1, Orientation::Horizontal))
        .unwrap();
    grid.reset_used_tracking();

    // (1, 1) is in the exclusion zone but still open water for shooting
    assert_eq!(grid.resolve_shot(at(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        grid.resolve_shot(at(1, 1)).unwrap_err(),
        GridError::AlreadyTargeted
    );
    assert_eq!(grid.shot_count(), 1);
}

#[test]
fn test_wreck_ring_becomes_untargetable() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(2, 2, 2, Orientation::Vertical))
        .unwrap();
    grid.place_vessel(vessel(5, 5, 1, Orientation::Horizontal))
        .unwrap();
    grid.reset_used_tracking();

    assert_eq!(grid.resolve_shot(at(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotOutcome::Hit);
    assert_eq!(grid.resolve_shot(at(3, 2)).unwrap(), ShotOutcome::Sunk);
    assert!(!grid.is_defeated());

    for ring in [at(1, 2), at(1, 3), at(2, 1), at(4, 3), at(4, 1)] {
        assert_eq!(grid.cell_state(ring), CellState::Blocked);
        assert_eq!(grid.resolve_shot(ring).unwrap_err(), GridError::AlreadyTargeted);
    }
    // earlier shots keep their own markers
    assert_eq!(grid.cell_state(at(1, 1)), CellState::Miss);
    assert_eq!(grid.cell_state(at(2, 2)), CellState::Hit);
    // outside the ring
    assert_eq!(grid.resolve_shot(at(0, 0)).unwrap(), ShotOutcome::Miss);

    assert_eq!(grid.resolve_shot(at(5, 5)).unwrap(), ShotOutcome::Sunk);
    assert!(grid.is_defeated());
}

#[test]
fn test_exclusion_zone_is_hidden_until_marked() {
    let mut grid = Grid::new(6).unwrap();
    let ship = vessel(2, 2, 1, Orientation::Horizontal);
    grid.place_vessel(ship).unwrap();

    assert!(grid.is_reserved(at(1, 1)));
    assert!(grid.is_reserved(at(3, 3)));
    assert!(!grid.is_reserved(at(4, 4)));
    assert_eq!(grid.cell_state(at(1, 1)), CellState::Water);
    assert_eq!(grid.cell_state(at(2, 2)), CellState::Vessel);

    grid.apply_exclusion_zone(&ship, true).unwrap();
    assert_eq!(grid.cell_state(at(1, 1)), CellState::Blocked);
    // the vessel itself is never blocked
    assert_eq!(grid.cell_state(at(2, 2)), CellState::Vessel);
    assert_eq!(grid.resolve_shot(at(2, 2)).unwrap(), ShotOutcome::Sunk);
}

#[test]
fn test_reset_used_tracking_forgets_shots_only() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(0, 0, 2, Orientation::Horizontal))
        .unwrap();
    grid.resolve_shot(at(4, 4)).unwrap();
    assert_eq!(grid.shot_count(), 1);

    grid.reset_used_tracking();
    assert_eq!(grid.shot_count(), 0);
    assert_eq!(grid.resolve_shot(at(4, 4)).unwrap(), ShotOutcome::Miss);
    // placement bookkeeping survives
    assert_eq!(
        grid.place_vessel(vessel(1, 0, 1, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
}

#[test]
fn test_concealed_grid_hides_vessels() {
    let mut grid = Grid::new(6).unwrap();
    grid.place_vessel(vessel(0, 0, 2, Orientation::Horizontal))
        .unwrap();
    grid.set_concealed(true);
    assert!(grid.is_concealed());
    assert_eq!(grid.cell_state(at(0, 1)), CellState::Water);

    grid.resolve_shot(at(0, 0)).unwrap();
    assert_eq!(grid.cell_state(at(0, 0)), CellState::Hit);
    assert_eq!(grid.cell_state(at(0, 1)), CellState::Water);
}

#[test]
fn test_grid_size_limits() {
    assert_eq!(Grid::max_size(), 11);
    assert!(Grid::new(1).is_ok());
    assert!(Grid::new(11).is_ok());
    assert_eq!(Grid::new(0).unwrap_err(), GridError::EmptyGrid);
    assert!(matches!(
        Grid::new(12),
        Err(GridError::BitBoard(seabattle::BitBoardError::SizeTooLarge { size: 12, .. }))
    ));
}

#[test]
fn test_empty_grid_is_defeated() {
    let grid = Grid::new(6).unwrap();
    assert!(grid.is_defeated());
}

#[test]
fn test_vessel_longer_than_grid_rejected() {
    let mut grid = Grid::new(6).unwrap();
    assert_eq!(
        grid.place_vessel(vessel(0, 0, 7, Orientation::Horizontal))
            .unwrap_err(),
        GridError::InvalidPlacement
    );
    let huge = Vessel::new(at(0, 0), i32::MAX as usize, Orientation::Vertical).unwrap();
    assert_eq!(grid.place_vessel(huge).unwrap_err(), GridError::InvalidPlacement);
    assert!(grid.vessels().is_empty());
    assert!(!grid.is_reserved(at(0, 0)));
}
