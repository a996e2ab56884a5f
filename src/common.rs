//! Common types for the rules engine: attack results and errors.

use alloc::string::String;

use crate::coordinate::Coordinate;

/// Result of an attack that was accepted by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// Attack landed on open water.
    Miss,
    /// Attack struck a ship; at least one ship is still afloat.
    Hit,
    /// Attack struck a ship and every ship on the board is now sunk.
    GameOver,
}

impl AttackResult {
    /// `true` for both `Hit` and `GameOver`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementIssue {
    /// Coordinate count does not match the ship's size.
    LengthMismatch { expected: usize, got: usize },
    /// A coordinate is already occupied, or listed twice.
    Overlap(Coordinate),
    /// The ship already has coordinates.
    AlreadyPlaced,
    /// Ship size outside the allowed range.
    InvalidSize(usize),
    /// Selected cells do not form one straight, gap-free line.
    NotStraight,
    /// No ship is waiting to be placed.
    NothingToPlace,
}

/// Why an attack was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackIssue {
    NotInBattle,
    OutOfTurn,
    AlreadyAttacked(Coordinate),
    NotSingleTarget(usize),
}

/// Errors returned by board, placement and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Placement rejected; the board is unchanged.
    InvalidPlacement(PlacementIssue),
    /// Generated coordinates would leave the grid.
    OutOfBounds,
    /// Attack rejected; nothing was mutated.
    IllegalAttack(AttackIssue),
    /// Text could not be read as a coordinate.
    MalformedCoordinate(String),
    /// Text could not be read as a player intent.
    UnknownIntent(String),
}

impl core::fmt::Display for PlacementIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementIssue::LengthMismatch { expected, got } => {
                write!(f, "expected {} cells, got {}", expected, got)
            }
            PlacementIssue::Overlap(c) => write!(f, "cell {} is already taken", c),
            PlacementIssue::AlreadyPlaced => write!(f, "ship is already placed"),
            PlacementIssue::InvalidSize(size) => {
                write!(f, "ship size {} is outside 1..=5", size)
            }
            PlacementIssue::NotStraight => {
                write!(f, "cells must form a straight line without gaps")
            }
            PlacementIssue::NothingToPlace => write!(f, "no ship left to place"),
        }
    }
}

impl core::fmt::Display for AttackIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackIssue::NotInBattle => write!(f, "the battle is not in progress"),
            AttackIssue::OutOfTurn => write!(f, "not this side's turn"),
            AttackIssue::AlreadyAttacked(c) => write!(f, "{} was already attacked", c),
            AttackIssue::NotSingleTarget(n) => {
                write!(f, "exactly one target cell required, got {}", n)
            }
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement(issue) => write!(f, "Invalid placement: {}", issue),
            GameError::OutOfBounds => write!(f, "Placement would run off the board"),
            GameError::IllegalAttack(issue) => write!(f, "Illegal attack: {}", issue),
            GameError::MalformedCoordinate(input) => {
                write!(f, "Malformed coordinate '{}' (expected A1..J10)", input)
            }
            GameError::UnknownIntent(input) => write!(f, "Unknown command '{}'", input),
        }
    }
}

impl core::error::Error for GameError {}

impl From<PlacementIssue> for GameError {
    fn from(issue: PlacementIssue) -> Self {
        GameError::InvalidPlacement(issue)
    }
}

impl From<AttackIssue> for GameError {
    fn from(issue: AttackIssue) -> Self {
        GameError::IllegalAttack(issue)
    }
}

/// Something that can be fired upon and eventually sunk.
pub trait Attackable {
    /// What a single attack reports back.
    type Outcome;

    /// Apply an attack on `target`.
    fn receive_attack(&mut self, target: Coordinate) -> Self::Outcome;

    /// `true` once nothing is left afloat.
    fn is_sunk(&self) -> bool;
}
