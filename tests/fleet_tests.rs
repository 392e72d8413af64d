use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    generate_fleet, random_vessel, Grid, GridError, CANONICAL_FLEET, DEFAULT_GRID_SIZE,
    PLACEMENT_ATTEMPT_BUDGET,
};

#[test]
fn test_generate_canonical_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    // retry from scratch as the caller is expected to
    while !generate_fleet(&mut rng, &mut grid, &CANONICAL_FLEET, PLACEMENT_ATTEMPT_BUDGET).unwrap() {
        grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    }
    let lengths: Vec<_> = grid.vessels().iter().map(|v| v.length()).collect();
    assert_eq!(lengths, CANONICAL_FLEET.to_vec());
}

#[test]
fn test_zero_budget_gives_no_result() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    assert!(!generate_fleet(&mut rng, &mut grid, &CANONICAL_FLEET, 0).unwrap());
    assert!(grid.vessels().is_empty());
}

#[test]
fn test_empty_fleet_is_trivially_placed() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut grid = Grid::new(DEFAULT_GRID_SIZE).unwrap();
    assert!(generate_fleet(&mut rng, &mut grid, &[], 0).unwrap());
}

#[test]
fn test_random_grid_is_ready_for_battle() {
    let mut rng = SmallRng::seed_from_u64(7);
    let grid = Grid::random(&mut rng, DEFAULT_GRID_SIZE, &CANONICAL_FLEET, PLACEMENT_ATTEMPT_BUDGET)
        .unwrap();
    assert_eq!(grid.vessels().len(), 6);
    assert_eq!(grid.shot_count(), 0);
    assert_eq!(grid.destroyed(), 0);
    assert!(!grid.is_defeated());
}

#[test]
fn test_random_grid_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let a = Grid::random(&mut rng1, DEFAULT_GRID_SIZE, &CANONICAL_FLEET, PLACEMENT_ATTEMPT_BUDGET)
        .unwrap();
    let b = Grid::random(&mut rng2, DEFAULT_GRID_SIZE, &CANONICAL_FLEET, PLACEMENT_ATTEMPT_BUDGET)
        .unwrap();
    assert_eq!(a.vessels(), b.vessels());
}

#[test]
fn test_many_layouts_succeed() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for _ in 0..200 {
        let grid =
            Grid::random(&mut rng, DEFAULT_GRID_SIZE, &CANONICAL_FLEET, PLACEMENT_ATTEMPT_BUDGET);
        assert!(grid.is_ok());
    }
}

#[test]
fn test_fleet_that_cannot_fit() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        Grid::random(&mut rng, 4, &[5], PLACEMENT_ATTEMPT_BUDGET).unwrap_err(),
        GridError::FleetDoesNotFit
    );
    assert_eq!(
        Grid::random(&mut rng, 4, &[2, 0], PLACEMENT_ATTEMPT_BUDGET).unwrap_err(),
        GridError::FleetDoesNotFit
    );
    // at most four isolated cells fit on a 3x3 grid
    assert_eq!(
        Grid::random(&mut rng, 3, &[1, 1, 1, 1, 1], 50).unwrap_err(),
        GridError::FleetDoesNotFit
    );
}

#[test]
fn test_zero_sized_grid_rejected() {
    let mut rng = SmallRng::seed_from_u64(4);
    assert_eq!(
        Grid::random(&mut rng, 0, &[], PLACEMENT_ATTEMPT_BUDGET).unwrap_err(),
        GridError::EmptyGrid
    );
}

#[test]
fn test_random_vessel_bows_stay_near_grid() {
    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..500 {
        let ship = random_vessel(&mut rng, 6, 2).unwrap();
        let bow = ship.bow();
        assert!((0..=6).contains(&bow.row));
        assert!((0..=6).contains(&bow.col));
        assert_eq!(ship.length(), 2);
    }
}
