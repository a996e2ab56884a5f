use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    AttackResult, Board, ComputerPlayer, Coordinate, Ship, ShipType, TargetingPolicy,
    UniformRandom, BOARD_CELLS, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use std::collections::HashSet;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    ComputerPlayer::new().place_ships(&mut rng, &mut board).unwrap();
    board
}

fn cell() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_CELLS).prop_map(|i| Coordinate::from_index(i).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn auto_placement_yields_full_fleet(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.ship_count(), NUM_SHIPS);
        prop_assert_eq!(board.ship_space().len(), TOTAL_SHIP_CELLS);
        let unique: HashSet<Coordinate> = board.ship_space().iter().copied().collect();
        prop_assert_eq!(unique.len(), TOTAL_SHIP_CELLS);
        for ship in board.ships() {
            prop_assert_eq!(ship.coords().len(), ship.size());
            for c in ship.coords() {
                prop_assert!(board.is_occupied(*c));
            }
        }
    }

    #[test]
    fn mismatched_length_never_mutates(seed in any::<u64>(), size in 1usize..=5, extra in 1usize..4) {
        let mut board = random_board(seed);
        let before_space = board.ship_space().to_vec();
        let before_count = board.ship_count();
        let free: Vec<Coordinate> = board.spaces().iter().copied().filter(|c| !board.is_occupied(*c)).collect();
        let coords = &free[..size + extra];
        let ship = Ship::new(ShipType::new("Probe", size)).unwrap();
        prop_assert!(board.place_ship(ship, coords).is_err());
        prop_assert_eq!(board.ship_space(), before_space.as_slice());
        prop_assert_eq!(board.ship_count(), before_count);
    }

    #[test]
    fn attack_accounting(seed in any::<u64>(), target in cell()) {
        let mut board = random_board(seed);
        let hits_before = board.hits();
        let occupied = board.is_occupied(target);
        let owner_hits_before = board.ship_at(target).map(|s| s.hits());
        let result = board.receive_attack(target).unwrap();
        if occupied {
            prop_assert!(result.is_hit());
            prop_assert_eq!(board.hits(), hits_before + 1);
            prop_assert_eq!(board.ship_at(target).map(|s| s.hits()), owner_hits_before.map(|h| h + 1));
            prop_assert!(board.miss_space().is_empty());
        } else {
            prop_assert_eq!(result, AttackResult::Miss);
            prop_assert_eq!(board.hits(), hits_before);
            prop_assert_eq!(board.miss_space(), &[target]);
        }
    }

    #[test]
    fn each_ship_sinks_exactly_once(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let fleet: Vec<Vec<Coordinate>> = board.ships().iter().map(|s| s.coords().to_vec()).collect();
        let mut last = AttackResult::Miss;
        for (i, coords) in fleet.iter().enumerate() {
            let sunk_before = board.sunk();
            for (n, c) in coords.iter().enumerate() {
                last = board.receive_attack(*c).unwrap();
                let expected = if n + 1 == coords.len() { sunk_before + 1 } else { sunk_before };
                prop_assert_eq!(board.sunk(), expected);
            }
            prop_assert!(board.ships()[i].is_sunk());
        }
        prop_assert_eq!(last, AttackResult::GameOver);
        prop_assert_eq!(board.hits(), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn uniform_targeting_never_repeats(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(rng.random());
        let mut policy = UniformRandom;
        let mut seen = HashSet::new();
        while let Some(target) = policy.select_target(&board, &mut rng) {
            prop_assert!(!board.was_attacked(target));
            prop_assert!(seen.insert(target));
            board.receive_attack(target).unwrap();
        }
        prop_assert_eq!(seen.len(), BOARD_CELLS);
        prop_assert_eq!(board.unattacked().count(), 0);
    }
}
