use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const MIN_SHIP_SIZE: usize = 1;
pub const MAX_SHIP_SIZE: usize = 5;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of cells covered by the canonical fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const COMPUTER_NAME: &str = "Computer";

/// Pause before each computer shot, in milliseconds.
pub const COMPUTER_MOVE_DELAY_MS: u64 = 600;

