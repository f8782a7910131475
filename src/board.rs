//! Render board: what the player has seen so far, one glyph per cell.
//!
//! This is display state only. Whether a cell holds a ship, and whether
//! that ship is hit, lives on the [`Ship`](crate::Ship) values.

use core::fmt;

use crate::config::{NUM_COLS, NUM_ROWS};
use crate::coordinate::Coordinate;

pub const BLANK_CHAR: char = '.';
pub const HIT_CHAR: char = 'x';
pub const MISS_CHAR: char = 'o';

/// Contents of one rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Hit,
    Miss,
}

impl Glyph {
    pub fn as_char(self) -> char {
        match self {
            Glyph::Blank => BLANK_CHAR,
            Glyph::Hit => HIT_CHAR,
            Glyph::Miss => MISS_CHAR,
        }
    }
}

/// Grid of glyphs indexed by row label then column.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Glyph; NUM_COLS as usize]; NUM_ROWS as usize],
}

impl Board {
    /// Every cell blank.
    pub fn new() -> Self {
        Board {
            rows: [[Glyph::Blank; NUM_COLS as usize]; NUM_ROWS as usize],
        }
    }

    pub fn glyph(&self, coord: Coordinate) -> Glyph {
        self.rows[coord.row()][coord.col()]
    }

    /// Mark a hit. Hits always win over whatever was shown before.
    pub fn mark_hit(&mut self, coord: Coordinate) {
        self.rows[coord.row()][coord.col()] = Glyph::Hit;
    }

    /// Mark a miss, but only on a blank cell.
    pub fn mark_miss(&mut self, coord: Coordinate) {
        let cell = &mut self.rows[coord.row()][coord.col()];
        if *cell == Glyph::Blank {
            *cell = Glyph::Miss;
        }
    }

    /// Rows paired with their label, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (char, &[Glyph; NUM_COLS as usize])> {
        Coordinate::all()
            .step_by(NUM_COLS as usize)
            .map(|c| c.row_label())
            .zip(self.rows.iter())
    }

    /// Number of cells showing `glyph`.
    pub fn count(&self, glyph: Glyph) -> usize {
        self.rows.iter().flatten().filter(|&&g| g == glyph).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Column header followed by one line per row, e.g.
///
/// ```text
///   0 1 2 3 4 5 6 7 8 9
/// A . . x . . . . . . .
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..NUM_COLS {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (label, row) in self.rows() {
            write!(f, "{}", label)?;
            for glyph in row {
                write!(f, " {}", glyph.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
