#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coordinate;
#[cfg(feature = "std")]
pub mod driver;
mod game;
pub mod intent;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod ship;

pub use ai::*;
pub use bitboard::{BitBoard, Cells, Members};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
#[cfg(feature = "std")]
pub use driver::{GameDriver, SessionEvent};
pub use game::*;
pub use intent::Intent;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{Preview, Selection};
pub use player::*;
pub use ship::*;
