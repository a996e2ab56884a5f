//! Ship definitions and hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Cells;
use crate::common::{Attackable, GameError, PlacementIssue};
use crate::config::{MAX_SHIP_SIZE, MIN_SHIP_SIZE};
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightward from the anchor.
    Horizontal,
    /// Extends downward from the anchor.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A vessel that is either waiting for placement or sitting on a board.
///
/// Coordinates are assigned exactly once, by [`crate::Board::place_ship`].
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    coords: Vec<Coordinate>,
    mask: Cells,
    hit_cells: Cells,
}

impl Ship {
    /// Create an unplaced ship. Sizes outside `1..=5` are rejected.
    pub fn new(ship_type: ShipType) -> Result<Self, GameError> {
        let size = ship_type.length();
        if !(MIN_SHIP_SIZE..=MAX_SHIP_SIZE).contains(&size) {
            return Err(PlacementIssue::InvalidSize(size).into());
        }
        Ok(Ship {
            ship_type,
            coords: Vec::with_capacity(size),
            mask: Cells::new(),
            hit_cells: Cells::new(),
        })
    }

    /// Register an attack at `target`. Returns `true` if it struck a cell of
    /// this ship that had not been struck before; any other cell is ignored.
    pub fn hit(&mut self, target: Coordinate) -> bool {
        if self.mask.contains(target) {
            self.hit_cells.insert(target)
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits() == self.size()
    }

    /// Number of segments hit so far; never exceeds [`Ship::size`].
    pub fn hits(&self) -> usize {
        self.hit_cells.len()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Cells in placement order; empty until placed.
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn is_placed(&self) -> bool {
        !self.coords.is_empty()
    }

    /// `true` if `cell` belongs to this ship.
    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.mask.contains(cell)
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Cells {
        self.mask
    }

    /// Assign coordinates. The board checks length and overlap first.
    pub(crate) fn set_coords(&mut self, coords: &[Coordinate]) {
        debug_assert!(!self.is_placed());
        self.coords.extend_from_slice(coords);
        self.mask = coords.iter().copied().collect();
    }
}

impl Attackable for Ship {
    type Outcome = bool;

    fn receive_attack(&mut self, target: Coordinate) -> bool {
        self.hit(target)
    }

    fn is_sunk(&self) -> bool {
        Ship::is_sunk(self)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, hits: {}, coords: {:?} }}",
            self.name(),
            self.size(),
            self.hits(),
            self.coords,
        )
    }
}
