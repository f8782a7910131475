#![cfg(feature = "std")]

use log::LevelFilter;
use solitaire_battleship::{init_logging, level_from, LOG_ENV};

#[test]
fn test_level_from_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn test_level_falls_back_to_warn() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
    assert_eq!(level_from(Some("")), LevelFilter::Warn);
}

#[test]
fn test_init_twice_is_harmless() {
    assert_eq!(LOG_ENV, "BATTLESHIP_LOG");
    init_logging();
    init_logging();
    log::warn!("logger installed");
}
