//! Ship specs and placed ships with per-cell hit tracking.

use core::fmt;

use crate::cells::CellSet;
use crate::common::GameError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Consecutive columns in one row.
    Horizontal,
    /// Consecutive rows in one column.
    Vertical,
}

/// Kind of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    /// Create a new ship spec. Panics on a zero length.
    pub const fn new(name: &'static str, length: usize) -> Self {
        assert!(length > 0, "ship length must be positive");
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    /// Cells the ship would cover from `start`, or `None` if it runs off the grid.
    pub fn footprint(&self, start: Coordinate, orientation: Orientation) -> Option<CellSet> {
        let mut cells = CellSet::new();
        for i in 0..self.length {
            let cell = match orientation {
                Orientation::Horizontal => start.right(i)?,
                Orientation::Vertical => start.down(i)?,
            };
            cells.insert(cell);
        }
        Some(cells)
    }
}

/// What a shot did to one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipHit {
    /// The coordinate is not part of this ship.
    NotOnShip,
    /// The cell was hit on an earlier turn; nothing changed.
    AlreadyHit,
    /// A fresh hit that leaves the ship afloat.
    Hit,
    /// A fresh hit on the last intact cell.
    Sunk,
}

/// A ship placed on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    spec: ShipSpec,
    orientation: Orientation,
    origin: Coordinate,
    cells: CellSet,
    hits: CellSet,
}

impl Ship {
    /// Place a ship at `origin` with `orientation`, every cell unhit.
    pub fn new(
        spec: ShipSpec,
        orientation: Orientation,
        origin: Coordinate,
    ) -> Result<Self, GameError> {
        let cells = spec
            .footprint(origin, orientation)
            .ok_or(GameError::ShipOutOfBounds {
                ship: spec.name(),
                start: origin,
            })?;
        Ok(Ship {
            spec,
            orientation,
            origin,
            cells,
            hits: CellSet::new(),
        })
    }

    /// Record a shot at `coord`. Only unhit cells of this ship change.
    pub fn register_hit(&mut self, coord: Coordinate) -> ShipHit {
        if !self.cells.contains(coord) {
            return ShipHit::NotOnShip;
        }
        if !self.hits.insert(coord) {
            return ShipHit::AlreadyHit;
        }
        if self.is_sunk() {
            ShipHit::Sunk
        } else {
            ShipHit::Hit
        }
    }

    /// True once every occupied cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(coord)
    }

    pub fn is_hit(&self, coord: Coordinate) -> bool {
        self.hits.contains(coord)
    }

    /// Occupied cells paired with their hit flag, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, bool)> + '_ {
        self.cells.iter().map(move |c| (c, self.is_hit(c)))
    }

    pub fn occupied(&self) -> CellSet {
        self.cells
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn length(&self) -> usize {
        self.spec.length()
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.spec.name(),
            self.origin,
            self.orientation,
            self.hits.len(),
            self.spec.length(),
        )
    }
}
