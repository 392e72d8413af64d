use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    init_logging, AutomatedPlayer, Grid, MatchController, NullReporter, CANONICAL_FLEET,
    DEFAULT_GRID_SIZE, PLACEMENT_ATTEMPT_BUDGET,
};

/// Plays the computer against itself and prints the result as JSON.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <layout-seed> <match-seed>", args[0]);
        std::process::exit(1);
    }
    let layout_seed: u64 = args[1].parse()?;
    let match_seed: u64 = args[2].parse()?;

    let mut layout_rng = SmallRng::seed_from_u64(layout_seed);
    let user_grid = Grid::random(
        &mut layout_rng,
        DEFAULT_GRID_SIZE,
        &CANONICAL_FLEET,
        PLACEMENT_ATTEMPT_BUDGET,
    )?;
    let automated_grid = Grid::random(
        &mut layout_rng,
        DEFAULT_GRID_SIZE,
        &CANONICAL_FLEET,
        PLACEMENT_ATTEMPT_BUDGET,
    )?;

    let mut controller = MatchController::new(
        Box::new(AutomatedPlayer::new()),
        user_grid,
        Box::new(AutomatedPlayer::new()),
        automated_grid,
        SmallRng::seed_from_u64(match_seed),
    );
    controller.run(&mut NullReporter)?;

    println!("{}", serde_json::to_string(&controller.summary())?);
    Ok(())
}
