use sea_battle::{Attackable, Board, Coordinate, GameError, PlacementIssue, Ship, ShipType, FLEET};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

fn placed(name: &'static str, cells: &[&str]) -> Ship {
    let coords: Vec<Coordinate> = cells.iter().map(|s| c(s)).collect();
    let mut board = Board::new();
    board
        .place_ship(Ship::new(ShipType::new(name, coords.len())).unwrap(), &coords)
        .unwrap();
    board.ships()[0].clone()
}

#[test]
fn test_new_ship_is_empty() {
    let ship = Ship::new(ShipType::new("Cruiser", 3)).unwrap();
    assert_eq!(ship.size(), 3);
    assert_eq!(ship.hits(), 0);
    assert!(ship.coords().is_empty());
    assert!(!ship.is_placed());
    assert!(!ship.is_sunk());
}

#[test]
fn test_size_limits() {
    assert!(Ship::new(ShipType::new("Patrol", 1)).is_ok());
    assert!(Ship::new(ShipType::new("Carrier", 5)).is_ok());
    assert_eq!(
        Ship::new(ShipType::new("Raft", 0)).unwrap_err(),
        GameError::InvalidPlacement(PlacementIssue::InvalidSize(0))
    );
    assert_eq!(
        Ship::new(ShipType::new("Ark", 6)).unwrap_err(),
        GameError::InvalidPlacement(PlacementIssue::InvalidSize(6))
    );
    for def in FLEET {
        assert!(Ship::new(def).is_ok());
    }
}

#[test]
fn test_hit_only_counts_own_cells() {
    let mut ship = placed("Destroyer", &["A1", "A2"]);
    assert!(!ship.hit(c("B2")));
    assert_eq!(ship.hits(), 0);
    assert!(ship.hit(c("A1")));
    assert_eq!(ship.hits(), 1);
    assert_eq!(ship.coords(), &[c("A1"), c("A2")]);
}

#[test]
fn test_unplaced_ship_ignores_hits() {
    let mut ship = Ship::new(ShipType::new("Destroyer", 2)).unwrap();
    assert!(!ship.hit(c("A1")));
    assert_eq!(ship.hits(), 0);
}

#[test]
fn test_repeat_hit_on_same_cell_counts_once() {
    let mut ship = placed("Cruiser", &["C3", "C4", "C5"]);
    assert!(ship.hit(c("C3")));
    assert!(!ship.hit(c("C3")));
    assert!(!ship.hit(c("C3")));
    assert_eq!(ship.hits(), 1);
    assert!(!ship.is_sunk());
}

#[test]
fn test_sinks_after_every_cell_hit() {
    let mut ship = placed("Cruiser", &["G7", "H7", "I7"]);
    ship.hit(c("G7"));
    ship.hit(c("H7"));
    assert!(!ship.is_sunk());
    ship.hit(c("I7"));
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), ship.size());
}

#[test]
fn test_single_cell_ship_sinks_in_one() {
    let mut ship = placed("Patrol", &["F6"]);
    assert!(Attackable::receive_attack(&mut ship, c("F6")));
    assert!(Attackable::is_sunk(&ship));
}
