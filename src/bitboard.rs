//! A fixed-size set of grid cells packed into an unsigned integer.
//!
//! The type is `no_std` friendly and avoids heap allocations. Bit `i` is set
//! when the cell with linear index `i` is a member. Used for constant-time
//! membership checks next to the ordered histories kept by the board.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::{BOARD_CELLS, BOARD_SIZE};
use crate::coordinate::Coordinate;

/// Set of cells on the 10×10 grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The storage used throughout the crate.
pub type Cells = BitBoard<u128>;

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of cells the storage type can hold.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Empty set.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::CAPACITY >= BOARD_CELLS);
        BitBoard { bits: T::zero() }
    }

    #[inline]
    fn bit(cell: Coordinate) -> T {
        T::one() << cell.index()
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        (self.bits & Self::bit(cell)) != T::zero()
    }

    /// Adds `cell`; returns `false` if it was already present.
    pub fn insert(&mut self, cell: Coordinate) -> bool {
        let fresh = !self.contains(cell);
        self.bits = self.bits | Self::bit(cell);
        fresh
    }

    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` if the two sets share a cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Members in index order.
    pub fn iter(&self) -> Members<T> {
        Members {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T> Default for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Coordinate> for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T> BitOrAssign for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard ({} cells):", self.len())?;
        let n = BOARD_SIZE as usize;
        for idx in 0..BOARD_CELLS {
            let mark = match Coordinate::from_index(idx) {
                Some(cell) if self.contains(cell) => '■',
                _ => '□',
            };
            write!(f, "{} ", mark)?;
            if idx % n == n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the members of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct Members<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T> Iterator for Members<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_CELLS {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Coordinate::from_index(idx);
            }
        }
        None
    }
}
