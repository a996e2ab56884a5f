//! Cell addresses on the 10×10 grid.
//!
//! A coordinate is a row letter `A`..`J` plus a column number `1`..`10`,
//! written `"A1"`..`"J10"`. Internally it stores zero-based row and column,
//! and maps to the linear index `row * 10 + col` in `0..100`.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{BOARD_CELLS, BOARD_SIZE};

/// A single in-bounds cell. Every value of this type is a valid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build from zero-based row and column.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(GameError::OutOfBounds);
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Inverse of [`Coordinate::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_CELLS {
            return None;
        }
        let n = BOARD_SIZE as usize;
        Some(Self {
            row: (index / n) as u8,
            col: (index % n) as u8,
        })
    }

    /// Linear index in `0..100`.
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// One-based column number as printed.
    pub fn column_number(&self) -> usize {
        self.col as usize + 1
    }

    /// All 100 cells in row-major order, `A1` first and `J10` last.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_CELLS).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column_number())
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || GameError::MalformedCoordinate(input.to_string());
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(malformed());
        }
        let row = (letter as u8 - b'A') as usize;
        let digits = chars.as_str();
        if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let column: usize = digits.parse().map_err(|_| malformed())?;
        Coordinate::new(row, column - 1).map_err(|_| malformed())
    }
}

impl From<Coordinate> for String {
    fn from(c: Coordinate) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Coordinate {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = GameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
