use crate::common::GameError;
use crate::ship::ShipSpec;

pub const NUM_ROWS: u8 = 10;
pub const NUM_COLS: u8 = 10;
pub const MIN_ROW_LABEL: char = 'A';
pub const MAX_ROW_LABEL: char = 'J';
pub const NUM_CELLS: usize = NUM_ROWS as usize * NUM_COLS as usize;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("carrier", 5),
    ShipSpec::new("battleship", 4),
    ShipSpec::new("cruiser", 3),
    ShipSpec::new("submarine", 3),
    ShipSpec::new("destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += FLEET[i].length();
        i += 1;
    }
    total
};

/// Misses allowed before the round is lost, unless overridden.
pub const MAX_MISSES: usize = 20;

/// Random start positions drawn per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

/// Look up one of the standard fleet's specs by name (case-insensitive).
pub fn ship_spec(name: &str) -> Option<ShipSpec> {
    FLEET
        .iter()
        .find(|spec| spec.name().eq_ignore_ascii_case(name))
        .copied()
}

/// How a miss at a coordinate that already missed is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMissPolicy {
    /// Every miss goes into the miss log, repeats included.
    #[default]
    Charge,
    /// Only the first miss at a coordinate is logged.
    Free,
}

/// Per-round settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_misses: usize,
    pub repeat_misses: RepeatMissPolicy,
}

impl GameConfig {
    pub const fn new(max_misses: usize, repeat_misses: RepeatMissPolicy) -> Self {
        Self {
            max_misses,
            repeat_misses,
        }
    }

    /// Same config with a different miss limit.
    pub const fn with_max_misses(self, max_misses: usize) -> Self {
        Self { max_misses, ..self }
    }

    pub const fn with_repeat_misses(self, repeat_misses: RepeatMissPolicy) -> Self {
        Self {
            repeat_misses,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_misses == 0 {
            return Err(GameError::InvalidConfig("max_misses must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(MAX_MISSES, RepeatMissPolicy::Charge)
    }
}
