#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error`, `warn`, `info`, ...).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the game itself
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from `BATTLESHIP_LOG`.
/// Calling it again after a logger is installed has no effect.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
