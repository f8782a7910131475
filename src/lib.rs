#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cells;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use board::*;
pub use cells::{CellSet, Cells};
pub use common::*;
pub use config::*;
pub use coordinate::{row_index, Coordinate, CoordinateError};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use ship::*;
