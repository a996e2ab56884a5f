use rand::Rng;

use crate::ai::{TargetingPolicy, UniformRandom};
use crate::board::Board;
use crate::common::GameError;
use crate::config::FLEET;
use crate::coordinate::Coordinate;
use crate::placement;
use crate::ship::{Ship, ShipType};

/// Place `ship_type` at random, retrying until the board accepts it.
/// Retries are unbounded.
pub fn place_randomly<R: Rng>(rng: &mut R, board: &mut Board, ship_type: ShipType) -> Result<(), GameError> {
    let mut ship = Ship::new(ship_type)?;
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let coords = placement::random_candidate(rng, ship.size())?;
        match board.place_ship(ship, &coords) {
            Ok(()) => {
                log::debug!("{} placed after {} attempt(s)", ship_type.name(), attempts);
                return Ok(());
            }
            Err(rejected) => ship = rejected.into_ship(),
        }
    }
}

/// The computer side: random fleet layout plus a targeting policy.
#[derive(Debug, Clone, Default)]
pub struct ComputerPlayer<P = UniformRandom> {
    policy: P,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self {
            policy: UniformRandom,
        }
    }
}

impl<P: TargetingPolicy> ComputerPlayer<P> {
    /// Place all ships of the canonical fleet onto `board`.
    pub fn place_ships<R: Rng>(&mut self, rng: &mut R, board: &mut Board) -> Result<(), GameError> {
        for def in FLEET {
            place_randomly(rng, board, def)?;
        }
        Ok(())
    }

    /// Choose the next target on the opponent's board.
    pub fn select_target<R: Rng>(&mut self, rng: &mut R, opponent: &Board) -> Option<Coordinate> {
        self.policy.select_target(opponent, rng)
    }
}
