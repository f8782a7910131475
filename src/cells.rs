//! Fixed-size set of grid cells packed into a `u128`.
//!
//! Bit `i` stands for the coordinate whose [`Coordinate::index`] is `i`, so
//! the 100 cells of the board fit in one word and set operations are single
//! bitwise instructions.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::config::{NUM_CELLS, NUM_COLS, NUM_ROWS};
use crate::coordinate::Coordinate;

/// A set of coordinates on the board.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    const MASK: u128 = (1u128 << NUM_CELLS) - 1;

    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    /// Set containing every cell of the board.
    #[inline]
    pub const fn full() -> Self {
        CellSet { bits: Self::MASK }
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.bits >> coord.index()) & 1 == 1
    }

    /// Add `coord`. Returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let fresh = !self.contains(coord);
        self.bits |= 1u128 << coord.index();
        fresh
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if the two sets share no cell.
    #[inline]
    pub fn is_disjoint(&self, other: &CellSet) -> bool {
        self.bits & other.bits == 0
    }

    /// True if every cell of `self` is in `other`.
    #[inline]
    pub fn is_subset(&self, other: &CellSet) -> bool {
        self.bits & !other.bits == 0
    }

    /// Iterate members in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl FromIterator<Coordinate> for CellSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

/// Complement within the board.
impl Not for CellSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        CellSet {
            bits: !self.bits & Self::MASK,
        }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet({}):", self.len())?;
        for row in 0..NUM_ROWS as usize {
            for col in 0..NUM_COLS as usize {
                let on = (self.bits >> (row * NUM_COLS as usize + col)) & 1 == 1;
                write!(f, "{} ", if on { '■' } else { '□' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Coordinate::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Coordinate;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}
