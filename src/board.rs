//! One player's grid: placed ships, attack history and the win condition.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Cells;
use crate::common::{AttackIssue, AttackResult, Attackable, GameError, PlacementIssue};
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Returned by [`Board::place_ship`] when a placement is refused. The board
/// is untouched and the ship is handed back so the caller can retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceShipError {
    error: GameError,
    ship: Ship,
}

impl PlaceShipError {
    pub fn error(&self) -> &GameError {
        &self.error
    }

    /// The ship that was not placed.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

impl fmt::Display for PlaceShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.ship.name())
    }
}

impl core::error::Error for PlaceShipError {}

impl From<PlaceShipError> for GameError {
    fn from(err: PlaceShipError) -> Self {
        err.error
    }
}

/// Main board state: ship placements, hits, misses.
#[derive(Clone)]
pub struct Board {
    spaces: Vec<Coordinate>,
    ship_space: Vec<Coordinate>,
    ship_map: Cells,
    miss_space: Vec<Coordinate>,
    miss_map: Cells,
    hit_space: Vec<Coordinate>,
    hit_map: Cells,
    ships: Vec<Ship>,
    hits: usize,
    sunk: usize,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            spaces: Coordinate::all().collect(),
            ship_space: Vec::new(),
            ship_map: Cells::new(),
            miss_space: Vec::new(),
            miss_map: Cells::new(),
            hit_space: Vec::new(),
            hit_map: Cells::new(),
            ships: Vec::new(),
            hits: 0,
            sunk: 0,
        }
    }

    /// All 100 cells, `A1` through `J10`.
    pub fn spaces(&self) -> &[Coordinate] {
        &self.spaces
    }

    /// Occupied cells in placement order.
    pub fn ship_space(&self) -> &[Coordinate] {
        &self.ship_space
    }

    /// Missed cells in attack order.
    pub fn miss_space(&self) -> &[Coordinate] {
        &self.miss_space
    }

    /// Struck cells in attack order.
    pub fn hit_space(&self) -> &[Coordinate] {
        &self.hit_space
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Successful attacks received, across all ships.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn sunk(&self) -> usize {
        self.sunk
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> Cells {
        self.ship_map
    }

    pub fn is_occupied(&self, cell: Coordinate) -> bool {
        self.ship_map.contains(cell)
    }

    pub fn is_miss(&self, cell: Coordinate) -> bool {
        self.miss_map.contains(cell)
    }

    pub fn is_hit(&self, cell: Coordinate) -> bool {
        self.hit_map.contains(cell)
    }

    /// `true` if `cell` has been attacked, whatever the outcome.
    pub fn was_attacked(&self, cell: Coordinate) -> bool {
        self.is_hit(cell) || self.is_miss(cell)
    }

    /// Cells not yet attacked, in grid order.
    pub fn unattacked(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.spaces
            .iter()
            .copied()
            .filter(move |&cell| !self.was_attacked(cell))
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(cell))
    }

    /// Place `ship` on `coords`.
    ///
    /// Only the cell count, duplicate cells and overlap with earlier ships
    /// are checked here; shape and bounds belong to the placement helpers.
    pub fn place_ship(&mut self, mut ship: Ship, coords: &[Coordinate]) -> Result<(), PlaceShipError> {
        if let Err(issue) = self.check_placement(&ship, coords) {
            log::debug!("rejected {} at {:?}: {}", ship.name(), coords, issue);
            return Err(PlaceShipError {
                error: issue.into(),
                ship,
            });
        }
        ship.set_coords(coords);
        self.ship_space.extend_from_slice(coords);
        self.ship_map |= ship.mask();
        log::debug!("placed {} at {:?}", ship.name(), coords);
        self.ships.push(ship);
        Ok(())
    }

    fn check_placement(&self, ship: &Ship, coords: &[Coordinate]) -> Result<(), PlacementIssue> {
        if ship.is_placed() {
            return Err(PlacementIssue::AlreadyPlaced);
        }
        if coords.len() != ship.size() {
            return Err(PlacementIssue::LengthMismatch {
                expected: ship.size(),
                got: coords.len(),
            });
        }
        let mut seen = Cells::new();
        for &cell in coords {
            if self.ship_map.contains(cell) || !seen.insert(cell) {
                return Err(PlacementIssue::Overlap(cell));
            }
        }
        Ok(())
    }

    /// Process an attack at `target`, marking hits/misses and reporting result.
    ///
    /// A cell may be attacked once; repeats are refused without changing
    /// anything.
    pub fn receive_attack(&mut self, target: Coordinate) -> Result<AttackResult, GameError> {
        if self.was_attacked(target) {
            return Err(AttackIssue::AlreadyAttacked(target).into());
        }
        for ship in self.ships.iter_mut() {
            ship.hit(target);
        }
        if !self.ship_map.contains(target) {
            self.miss_space.push(target);
            self.miss_map.insert(target);
            return Ok(AttackResult::Miss);
        }
        self.hits += 1;
        self.hit_space.push(target);
        self.hit_map.insert(target);
        self.sunk = self.ships.iter().filter(|s| s.is_sunk()).count();
        if self.sunk == self.ships.len() {
            Ok(AttackResult::GameOver)
        } else {
            Ok(AttackResult::Hit)
        }
    }

    /// Slice form of [`Board::receive_attack`]; exactly one cell is accepted.
    pub fn receive_attack_at(&mut self, targets: &[Coordinate]) -> Result<AttackResult, GameError> {
        match targets {
            [target] => self.receive_attack(*target),
            _ => Err(AttackIssue::NotSingleTarget(targets.len()).into()),
        }
    }

    /// Snapshot for rendering. With `reveal == false` intact ship cells are
    /// reported as unknown water and only sunk ships list their cells.
    pub fn view(&self, reveal: bool) -> BoardView {
        let cells = self
            .spaces
            .iter()
            .map(|&cell| {
                if self.is_hit(cell) {
                    CellView::Hit
                } else if self.is_miss(cell) {
                    CellView::Miss
                } else if reveal && self.is_occupied(cell) {
                    CellView::Ship
                } else {
                    CellView::Water
                }
            })
            .collect();
        let ships = self
            .ships
            .iter()
            .map(|s| ShipView {
                name: s.name(),
                size: s.size(),
                hits: s.hits(),
                sunk: s.is_sunk(),
                coords: if reveal || s.is_sunk() {
                    s.coords().to_vec()
                } else {
                    Vec::new()
                },
            })
            .collect();
        BoardView {
            cells,
            ships,
            ship_count: self.ship_count(),
            hits: self.hits,
            sunk: self.sunk,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Attackable for Board {
    type Outcome = Result<AttackResult, GameError>;

    fn receive_attack(&mut self, target: Coordinate) -> Self::Outcome {
        Board::receive_attack(self, target)
    }

    fn is_sunk(&self) -> bool {
        self.all_sunk()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {}, sunk: {}/{},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map,
            self.hits,
            self.sunk,
            self.ships.len(),
            self.miss_space,
            self.ships
        )
    }
}

/// What a renderer shows for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CellView {
    Water,
    Ship,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipView {
    pub name: &'static str,
    pub size: usize,
    pub hits: usize,
    pub sunk: bool,
    pub coords: Vec<Coordinate>,
}

/// Read-only snapshot of a board, cells in grid order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardView {
    pub cells: Vec<CellView>,
    pub ships: Vec<ShipView>,
    pub ship_count: usize,
    pub hits: usize,
    pub sunk: usize,
}
