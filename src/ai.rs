//! Target selection for the computer opponent.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::Board;
use crate::coordinate::Coordinate;

/// Chooses the next cell to fire at on an opponent's board.
pub trait TargetingPolicy {
    /// Pick an unattacked cell of `board`, or `None` when every cell has
    /// already been attacked.
    fn select_target<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Coordinate>;
}

/// Uniform choice over the cells not yet hit or missed. Keeps no memory
/// between shots.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandom;

impl TargetingPolicy for UniformRandom {
    fn select_target<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Coordinate> {
        board.unattacked().choose(rng)
    }
}
