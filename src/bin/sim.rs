//! Headless game: both sides place at random and fire at random. Prints a
//! JSON summary.

use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{ComputerMove, ComputerPlayer, GameSession, Phase, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    sea_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = GameSession::start_game("Autopilot", &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    session.auto_place_human(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut autopilot = ComputerPlayer::new();

    while session.phase() == Phase::Battle {
        match session.current_turn() {
            Side::Human => {
                let target = autopilot
                    .select_target(&mut rng, session.board(Side::Computer))
                    .ok_or_else(|| anyhow::anyhow!("no targets left"))?;
                session
                    .attack(Side::Human, target)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }
            Side::Computer => {
                if let ComputerMove::NoMoves = session
                    .computer_turn(&mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?
                {
                    break;
                }
            }
        }
    }

    let result = json!({
        "seed": seed,
        "winner": session.winner(),
        "human": {
            "shots": session.shots_fired(Side::Human),
            "sunk": session.board(Side::Computer).sunk(),
        },
        "computer": {
            "shots": session.shots_fired(Side::Computer),
            "sunk": session.board(Side::Human).sunk(),
        },
        "final": session.view(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
