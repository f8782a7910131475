//! Fleet placement: manual placement with validation and the randomized
//! placement engine used when a round starts.

use alloc::vec::Vec;
use log::{debug, error, trace};
use rand::Rng;

use crate::cells::CellSet;
use crate::common::GameError;
use crate::config::{MAX_PLACEMENT_ATTEMPTS, NUM_COLS, NUM_ROWS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship, ShipSpec};

/// Placed ships and the union of the cells they cover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: CellSet,
}

impl Fleet {
    /// Empty fleet, nothing placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `spec` fits at `start` going `orientation`.
    pub fn can_place(
        &self,
        spec: ShipSpec,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.ships.iter().any(|s| s.name() == spec.name()) {
            return Err(GameError::DuplicateShip(spec.name()));
        }
        let footprint = spec
            .footprint(start, orientation)
            .ok_or(GameError::ShipOutOfBounds {
                ship: spec.name(),
                start,
            })?;
        if let Some(cell) = (footprint & self.occupied).iter().next() {
            return Err(GameError::ShipOverlaps {
                ship: spec.name(),
                cell,
            });
        }
        Ok(())
    }

    /// Place a ship. On error the fleet is left unchanged.
    pub fn place(
        &mut self,
        spec: ShipSpec,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<&Ship, GameError> {
        self.can_place(spec, start, orientation)?;
        let ship = Ship::new(spec, orientation, start)?;
        self.occupied |= ship.occupied();
        self.ships.push(ship);
        Ok(&self.ships[self.ships.len() - 1])
    }

    /// First orientation that fits at `start`, horizontal before vertical.
    pub fn fitting_orientation(&self, spec: ShipSpec, start: Coordinate) -> Option<Orientation> {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .find(|&o| self.can_place(spec, start, o).is_ok())
    }

    /// Place `spec` at a random valid position. Draws a fresh start cell for
    /// each attempt and gives up after `max_attempts` draws.
    pub fn place_random<R: Rng>(
        &mut self,
        rng: &mut R,
        spec: ShipSpec,
        max_attempts: usize,
    ) -> Result<&Ship, GameError> {
        for attempt in 1..=max_attempts {
            let start = random_position(rng);
            match self.fitting_orientation(spec, start) {
                Some(orientation) => {
                    debug!(
                        "placed {} at {} {:?} after {} attempt(s)",
                        spec.name(),
                        start,
                        orientation,
                        attempt
                    );
                    return self.place(spec, start, orientation);
                }
                None => trace!("{} does not fit at {}", spec.name(), start),
            }
        }
        error!(
            "no room for {} after {} attempts",
            spec.name(),
            max_attempts
        );
        Err(GameError::PlacementExhausted {
            ship: spec.name(),
            attempts: max_attempts,
        })
    }

    /// Mutable access for guess resolution. Cell sets cannot change.
    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name() == name)
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// True when there is at least one ship and all of them are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }
}

/// Uniformly random cell of the board.
pub fn random_position<R: Rng>(rng: &mut R) -> Coordinate {
    let row = rng.random_range(0..NUM_ROWS as usize);
    let col = rng.random_range(0..NUM_COLS as usize);
    match Coordinate::new(row, col) {
        Ok(coord) => coord,
        Err(_) => unreachable!("random_range stays inside the grid"),
    }
}

/// Place every spec, in order, at random non-overlapping positions.
pub fn place_fleet<R: Rng>(rng: &mut R, specs: &[ShipSpec]) -> Result<Fleet, GameError> {
    let mut fleet = Fleet::new();
    for &spec in specs {
        fleet.place_random(rng, spec, MAX_PLACEMENT_ATTEMPTS)?;
    }
    Ok(fleet)
}
