#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use sea_battle::{
    cli::run_session, init_logging, intent::StdinIntents, GameDriver, GameSession, Phase, Side,
    COMPUTER_MOVE_DELAY_MS, DEFAULT_PLAYER_NAME,
};
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Play a game of sea battle against the computer in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Name shown for the human player.
    #[arg(long, default_value = DEFAULT_PLAYER_NAME)]
    name: String,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Pause before each computer shot.
    #[arg(long, default_value_t = COMPUTER_MOVE_DELAY_MS)]
    delay_ms: u64,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let session = GameSession::start_game(&cli.name, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let (mut driver, mut events) = GameDriver::new(session, rng, Duration::from_millis(cli.delay_ms));
    println!("Type 'help' for commands.");

    let mut input = StdinIntents::new();
    let last = run_session(&mut driver, &mut events, &mut input).await?;
    if last.phase == Phase::Over {
        match last.winner {
            Some(Side::Human) => println!("Well played, {}!", last.human_name),
            Some(Side::Computer) => println!("Better luck next time, {}.", last.human_name),
            None => println!("No winner this time."),
        }
    }
    Ok(())
}
