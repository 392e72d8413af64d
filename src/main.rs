use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    greet, init_logging, AutomatedPlayer, ConsoleReporter, Grid, HumanPlayer, MatchConfig,
    MatchController, PlayerError, DEFAULT_GRID_SIZE, DEFAULT_PACE_MS,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE as u8, value_parser = clap::value_parser!(u8).range(2..=11))]
    size: u8,
    #[arg(long, help = "Show the computer's fleet")]
    reveal: bool,
    #[arg(long, default_value_t = DEFAULT_PACE_MS, help = "Pause before each computer move")]
    pace_ms: u64,
}

impl From<Cli> for MatchConfig {
    fn from(cli: Cli) -> Self {
        MatchConfig {
            grid_size: usize::from(cli.size),
            seed: cli.seed,
            reveal_automated: cli.reveal,
            pace: Duration::from_millis(cli.pace_ms),
            ..MatchConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = MatchConfig::from(Cli::parse());

    let mut rng = if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let user_grid = Grid::random(&mut rng, config.grid_size, config.fleet, config.attempt_budget)?;
    let mut automated_grid =
        Grid::random(&mut rng, config.grid_size, config.fleet, config.attempt_budget)?;
    automated_grid.set_concealed(!config.reveal_automated);

    greet(&mut std::io::stdout())?;

    let mut controller = MatchController::new(
        Box::new(HumanPlayer::stdio()),
        user_grid,
        Box::new(AutomatedPlayer::new()),
        automated_grid,
        rng,
    );
    let mut reporter = ConsoleReporter::stdout(config.pace);
    match controller.run(&mut reporter) {
        Ok(_) => Ok(()),
        Err(PlayerError::InputClosed) => {
            println!("\nInput closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(e)),
    }
}
