//! Candidate generation and validation for ship placement.
//!
//! Everything here is pure with respect to the board: candidates are
//! computed and checked, but only [`Board::place_ship`] commits them.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::{GameError, PlacementIssue};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Orientation;

const GRID: usize = BOARD_SIZE as usize;

fn check_size(size: usize) -> Result<(), GameError> {
    if size == 0 {
        return Err(PlacementIssue::InvalidSize(size).into());
    }
    if size > GRID {
        return Err(GameError::OutOfBounds);
    }
    Ok(())
}

fn run(fixed: usize, first: usize, size: usize, orientation: Orientation) -> Result<Vec<Coordinate>, GameError> {
    (first..first + size)
        .map(|i| match orientation {
            Orientation::Horizontal => Coordinate::new(fixed, i),
            Orientation::Vertical => Coordinate::new(i, fixed),
        })
        .collect()
}

/// `size` cells starting at `anchor`, rightward or downward.
///
/// Returns [`GameError::OutOfBounds`] instead of a truncated run when the
/// ship would leave the grid.
pub fn anchored(size: usize, anchor: Coordinate, orientation: Orientation) -> Result<Vec<Coordinate>, GameError> {
    check_size(size)?;
    match orientation {
        Orientation::Horizontal => run(anchor.row(), anchor.col(), size, orientation),
        Orientation::Vertical => run(anchor.col(), anchor.row(), size, orientation),
    }
}

/// Orientation implied by a drag: vertical only when the row distance is
/// strictly larger than the column distance.
pub fn drag_orientation(start: Coordinate, end: Coordinate) -> Orientation {
    let d_row = start.row().abs_diff(end.row());
    let d_col = start.col().abs_diff(end.col());
    if d_row > d_col {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// `size` cells for a drag from `start` towards `end`.
///
/// The run begins at `start` and grows in the drag direction, then slides
/// back onto the grid if it would overhang an edge. The result is always in
/// bounds and sorted.
pub fn dragged(size: usize, start: Coordinate, end: Coordinate) -> Result<Vec<Coordinate>, GameError> {
    check_size(size)?;
    let orientation = drag_orientation(start, end);
    let (fixed, from, to) = match orientation {
        Orientation::Horizontal => (start.row(), start.col(), end.col()),
        Orientation::Vertical => (start.col(), start.row(), end.row()),
    };
    let first = if to >= from {
        from
    } else {
        from.saturating_sub(size - 1)
    };
    let first = first.min(GRID - size);
    run(fixed, first, size, orientation)
}

/// Verdict on a candidate, for rendering previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Every cell is free; the candidate may be committed.
    Valid(Vec<Coordinate>),
    /// Some cells are already taken by another ship.
    Blocked {
        coords: Vec<Coordinate>,
        conflicts: Vec<Coordinate>,
    },
    /// No candidate exists because the ship would leave the grid.
    OutOfBounds,
}

impl Preview {
    pub fn is_valid(&self) -> bool {
        matches!(self, Preview::Valid(_))
    }

    /// Cells to highlight, if any.
    pub fn cells(&self) -> &[Coordinate] {
        match self {
            Preview::Valid(coords) | Preview::Blocked { coords, .. } => coords,
            Preview::OutOfBounds => &[],
        }
    }
}

/// Check `coords` against the ships already on `board`.
pub fn check(board: &Board, coords: &[Coordinate]) -> Preview {
    let conflicts: Vec<Coordinate> = coords
        .iter()
        .copied()
        .filter(|&c| board.is_occupied(c))
        .collect();
    if conflicts.is_empty() {
        Preview::Valid(coords.to_vec())
    } else {
        Preview::Blocked {
            coords: coords.to_vec(),
            conflicts,
        }
    }
}

fn preview_of(board: &Board, candidate: Result<Vec<Coordinate>, GameError>) -> Preview {
    match candidate {
        Ok(coords) => check(board, &coords),
        Err(_) => Preview::OutOfBounds,
    }
}

pub fn preview_anchored(board: &Board, size: usize, anchor: Coordinate, orientation: Orientation) -> Preview {
    preview_of(board, anchored(size, anchor, orientation))
}

pub fn preview_dragged(board: &Board, size: usize, start: Coordinate, end: Coordinate) -> Preview {
    preview_of(board, dragged(size, start, end))
}

/// One random in-bounds candidate for a ship of `size`. May overlap
/// existing ships; callers retry until the board accepts it.
pub fn random_candidate<R: Rng>(rng: &mut R, size: usize) -> Result<Vec<Coordinate>, GameError> {
    check_size(size)?;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_r, max_c) = match orientation {
        Orientation::Horizontal => (GRID - 1, GRID - size),
        Orientation::Vertical => (GRID - size, GRID - 1),
    };
    let anchor = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c))?;
    anchored(size, anchor, orientation)
}

/// Cells picked one at a time for a ship of a known size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    size: usize,
    cells: Vec<Coordinate>,
}

impl Selection {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: Vec::with_capacity(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells in the order they were picked.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.size
    }

    /// Add `cell`, or drop it if already selected. Occupied cells and picks
    /// beyond the ship's size are refused. Returns whether `cell` is now
    /// selected.
    pub fn toggle(&mut self, board: &Board, cell: Coordinate) -> Result<bool, GameError> {
        if let Some(pos) = self.cells.iter().position(|&c| c == cell) {
            self.cells.remove(pos);
            return Ok(false);
        }
        if board.is_occupied(cell) {
            return Err(PlacementIssue::Overlap(cell).into());
        }
        if self.is_complete() {
            return Err(PlacementIssue::LengthMismatch {
                expected: self.size,
                got: self.size + 1,
            }
            .into());
        }
        self.cells.push(cell);
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The selected cells as a sorted straight run, ready for
    /// [`Board::place_ship`].
    pub fn finish(mut self) -> Result<Vec<Coordinate>, GameError> {
        if !self.is_complete() {
            return Err(PlacementIssue::LengthMismatch {
                expected: self.size,
                got: self.cells.len(),
            }
            .into());
        }
        self.cells.sort();
        if !is_straight(&self.cells) {
            return Err(PlacementIssue::NotStraight.into());
        }
        Ok(self.cells)
    }
}

/// `true` if sorted `cells` form one gap-free row or column segment.
fn is_straight(cells: &[Coordinate]) -> bool {
    let same_row = cells.windows(2).all(|w| w[0].row() == w[1].row() && w[0].col() + 1 == w[1].col());
    let same_col = cells.windows(2).all(|w| w[0].col() == w[1].col() && w[0].row() + 1 == w[1].row());
    same_row || same_col
}
