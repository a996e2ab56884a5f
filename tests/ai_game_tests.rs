use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{ComputerMove, ComputerPlayer, GameSession, Phase, Side, BOARD_CELLS};

fn play_out(seed: u64) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::start_game("Autopilot", &mut rng).unwrap();
    session.auto_place_human(&mut rng).unwrap();
    let mut autopilot = ComputerPlayer::new();

    let mut turns = 0;
    while session.phase() == Phase::Battle {
        turns += 1;
        match session.current_turn() {
            Side::Human => {
                let target = autopilot
                    .select_target(&mut rng, session.board(Side::Computer))
                    .unwrap();
                session.attack(Side::Human, target).unwrap();
            }
            Side::Computer => {
                if let ComputerMove::NoMoves = session.computer_turn(&mut rng).unwrap() {
                    break;
                }
            }
        }
        if turns > 2 * BOARD_CELLS {
            panic!("game took too many turns");
        }
    }
    session
}

#[test]
fn test_random_vs_random_game() {
    let session = play_out(123);
    assert_eq!(session.phase(), Phase::Over);
    let winner = session.winner().unwrap();
    assert!(session.board(winner.opponent()).all_sunk());
    assert!(!session.board(winner).all_sunk());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = play_out(7);
    let b = play_out(7);
    assert_eq!(a.winner(), b.winner());
    assert_eq!(a.view(), b.view());
    assert_eq!(a.shots_fired(Side::Human), b.shots_fired(Side::Human));
}

#[test]
fn test_no_cell_attacked_twice() {
    for seed in 0..20 {
        let session = play_out(seed);
        for side in [Side::Human, Side::Computer] {
            let board = session.board(side);
            let mut seen: Vec<_> = board
                .hit_space()
                .iter()
                .chain(board.miss_space())
                .copied()
                .collect();
            let total = seen.len();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), total);
            assert!(board.hits() <= board.ship_space().len());
        }
    }
}
