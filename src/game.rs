//! Guess resolution for one round: hit/miss bookkeeping, sinking and the
//! win/loss state machine.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    cells::CellSet,
    common::{Event, GameError, GameStatus, GuessResult},
    config::{GameConfig, RepeatMissPolicy, FLEET},
    coordinate::Coordinate,
    placement::{place_fleet, Fleet},
    ship::{Ship, ShipHit},
};

/// End-of-round figures for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundSummary {
    pub status: GameStatus,
    pub misses: usize,
    pub max_misses: usize,
    pub hits: usize,
    pub ships_sunk: Vec<&'static str>,
    pub ships_afloat: Vec<&'static str>,
}

/// One round: a placed fleet, the miss log and the render board.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,
    guesses: Vec<Coordinate>,
    missed: CellSet,
    board: Board,
    config: GameConfig,
    status: GameStatus,
    events: Vec<Event>,
}

impl Game {
    /// New round with the standard fleet and default settings.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, GameError> {
        Self::with_config(rng, GameConfig::default())
    }

    /// New round with the standard fleet placed at random.
    pub fn with_config<R: Rng>(rng: &mut R, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let fleet = place_fleet(rng, &FLEET)?;
        Self::from_fleet(fleet, config)
    }

    /// New round over an already placed fleet.
    pub fn from_fleet(fleet: Fleet, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        if fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet has no ships"));
        }
        debug!(
            "new round: {} ships, {} misses allowed",
            fleet.len(),
            config.max_misses
        );
        Ok(Self {
            fleet,
            guesses: Vec::new(),
            missed: CellSet::new(),
            board: Board::new(),
            config,
            status: GameStatus::InProgress,
            events: Vec::new(),
        })
    }

    /// Resolve a guess at `position` and update the board and status.
    ///
    /// A repeat hit on a cell already hit returns `Hit` again and changes
    /// nothing. Misses go into the miss log as dictated by
    /// [`RepeatMissPolicy`]. Fails once the round is over.
    pub fn resolve_guess(&mut self, position: Coordinate) -> Result<GuessResult, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }

        let result = match self.strike(position) {
            Some(_) => {
                self.board.mark_hit(position);
                GuessResult::Hit
            }
            None => {
                self.record_miss(position);
                self.board.mark_miss(position);
                GuessResult::Miss
            }
        };
        self.update_status();
        Ok(result)
    }

    /// Apply a shot to the ship at `position`, if any.
    fn strike(&mut self, position: Coordinate) -> Option<&'static str> {
        for ship in self.fleet.ships_mut() {
            match ship.register_hit(position) {
                ShipHit::NotOnShip => continue,
                ShipHit::AlreadyHit => debug!("{} on {} was already hit", position, ship.name()),
                ShipHit::Hit => debug!("hit {} at {}", ship.name(), position),
                ShipHit::Sunk => {
                    info!("{} sunk at {}", ship.name(), position);
                    self.events.push(Event::ShipSunk(ship.name()));
                }
            }
            return Some(ship.name());
        }
        None
    }

    fn record_miss(&mut self, position: Coordinate) {
        let first = self.missed.insert(position);
        match self.config.repeat_misses {
            RepeatMissPolicy::Charge => self.guesses.push(position),
            RepeatMissPolicy::Free if first => self.guesses.push(position),
            RepeatMissPolicy::Free => debug!("repeat miss at {} not counted", position),
        }
        debug!(
            "miss at {} ({}/{})",
            position,
            self.guesses.len(),
            self.config.max_misses
        );
    }

    fn update_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.fleet.all_sunk() {
            info!("all ships sunk after {} misses", self.guesses.len());
            self.status = GameStatus::Won;
            self.events.push(Event::Win);
        } else if self.guesses.len() >= self.config.max_misses {
            info!("miss limit of {} reached", self.config.max_misses);
            self.status = GameStatus::Lost;
            self.events.push(Event::Loss);
        }
    }

    /// True once the round is won or lost.
    pub fn is_complete(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The terminal event, once there is one.
    pub fn outcome(&self) -> Option<Event> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(Event::Win),
            GameStatus::Lost => Some(Event::Loss),
        }
    }

    /// Take every notification queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ships(&self) -> &[Ship] {
        self.fleet.ships()
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.fleet.ship(name)
    }

    /// Miss log in the order the misses happened.
    pub fn guesses(&self) -> &[Coordinate] {
        &self.guesses
    }

    pub fn misses(&self) -> usize {
        self.guesses.len()
    }

    pub fn misses_remaining(&self) -> usize {
        self.config.max_misses.saturating_sub(self.guesses.len())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn summary(&self) -> RoundSummary {
        let (sunk, afloat): (Vec<&Ship>, Vec<&Ship>) =
            self.ships().iter().partition(|s| s.is_sunk());
        RoundSummary {
            status: self.status,
            misses: self.guesses.len(),
            max_misses: self.config.max_misses,
            hits: self.ships().iter().map(Ship::hit_count).sum(),
            ships_sunk: sunk.into_iter().map(Ship::name).collect(),
            ships_afloat: afloat.into_iter().map(Ship::name).collect(),
        }
    }
}
