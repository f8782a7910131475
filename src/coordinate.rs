//! Grid coordinates: a row label `A`..`J` and a column `0`..`9`.

use core::fmt;
use core::str::FromStr;

use crate::config::{MAX_ROW_LABEL, MIN_ROW_LABEL, NUM_CELLS, NUM_COLS, NUM_ROWS};

/// Errors produced when building or parsing a [`Coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// Row label outside `A`..`J`.
    InvalidRow(char),
    /// Zero-based row index outside `0..NUM_ROWS`.
    RowOutOfRange(usize),
    /// Column outside `0..NUM_COLS`.
    InvalidColumn(usize),
    /// Input did not look like a row label followed by a column.
    Malformed,
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidRow(c) => write!(
                f,
                "row {:?} is not between {} and {}",
                c, MIN_ROW_LABEL, MAX_ROW_LABEL
            ),
            CoordinateError::RowOutOfRange(r) => {
                write!(f, "row index {} is not between 0 and {}", r, NUM_ROWS - 1)
            }
            CoordinateError::InvalidColumn(c) => {
                write!(f, "column {} is not between 0 and {}", c, NUM_COLS - 1)
            }
            CoordinateError::Malformed => write!(f, "expected a row letter and a column number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateError {}

/// One cell of the grid. Always in bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build from zero-based row and column indices.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordinateError> {
        if row >= NUM_ROWS as usize {
            return Err(CoordinateError::RowOutOfRange(row));
        }
        if col >= NUM_COLS as usize {
            return Err(CoordinateError::InvalidColumn(col));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build from a row label (case-insensitive) and a column.
    pub fn from_label(label: char, col: usize) -> Result<Self, CoordinateError> {
        Self::new(row_index(label)?, col)
    }

    /// Inverse of [`Coordinate::index`]. `None` if `idx` is past the grid.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= NUM_CELLS {
            return None;
        }
        Some(Self {
            row: (idx / NUM_COLS as usize) as u8,
            col: (idx % NUM_COLS as usize) as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn row_label(&self) -> char {
        (MIN_ROW_LABEL as u8 + self.row) as char
    }

    /// Flattened position in `0..NUM_CELLS`, row-major.
    pub fn index(&self) -> usize {
        self.row() * NUM_COLS as usize + self.col()
    }

    /// The cell `n` columns to the right, if it is still on the grid.
    pub fn right(&self, n: usize) -> Option<Self> {
        Self::new(self.row(), self.col() + n).ok()
    }

    /// The cell `n` rows further down, if it is still on the grid.
    pub fn down(&self, n: usize) -> Option<Self> {
        Self::new(self.row() + n, self.col()).ok()
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_CELLS).filter_map(Coordinate::from_index)
    }
}

/// Zero-based row index for a label such as `'C'` or `'c'`.
pub fn row_index(label: char) -> Result<usize, CoordinateError> {
    let upper = label.to_ascii_uppercase();
    if !(MIN_ROW_LABEL..=MAX_ROW_LABEL).contains(&upper) {
        return Err(CoordinateError::InvalidRow(label));
    }
    Ok((upper as u8 - MIN_ROW_LABEL as u8) as usize)
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses `"B7"`, `"b7"` or `"B 7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let label = chars.next().ok_or(CoordinateError::Malformed)?;
        if !label.is_ascii_alphabetic() {
            return Err(CoordinateError::Malformed);
        }
        let col: usize = chars
            .as_str()
            .trim()
            .parse()
            .map_err(|_| CoordinateError::Malformed)?;
        Self::from_label(label, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}{})", self.row_label(), self.col)
    }
}
